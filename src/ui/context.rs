//! Terminal capability detection for the CLI

use is_terminal::IsTerminal;

use captable::config::{ColorMode, Config};

use crate::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let supports_color = detect_color_support();
        Self::from_support(json, cli_color, config, supports_color)
    }

    fn from_support(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        supports_color: bool,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => supports_color,
            },
        };

        Self {
            json,
            // JSON output is machine-read; never styled.
            color: color && !json,
        }
    }
}

fn detect_color_support() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
