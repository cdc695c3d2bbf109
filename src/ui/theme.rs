use crossterm::style::{Color, Stylize};

/// Design tokens for the Captable CLI.
///
/// All colors and icons used by the views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const BULLET: &str = "•";
    pub const ARROW: &str = "→";
}

/// Apply a foreground color when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Dim helper used for secondary detail lines
pub fn dim(text: &str, enabled: bool) -> String {
    paint(text, colors::DIM, enabled)
}
