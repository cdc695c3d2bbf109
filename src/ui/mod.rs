//! CLI presentation layer
//!
//! Views are pure `render(&data, color) -> String` functions over the
//! domain output; all terminal detection happens once in `UiContext`.

pub mod context;
pub mod table;
pub mod theme;
pub mod views;

pub use context::UiContext;
