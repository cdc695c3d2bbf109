//! Configuration module for Captable
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CAPTABLE_*)
//! 3. Project config (captable.toml in the working directory)
//! 4. User config (~/.config/captable/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, with_env_overrides, ConfigWarning};
pub use types::{ColorMode, Config, OutputConfig, SimulationConfig};
