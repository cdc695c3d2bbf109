//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::DilutionOptions;
use crate::error::CaptableResult;

use super::loader::{self, ConfigWarning};

/// Color output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Simulation configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    /// Maximum accepted deviation, in shares, between the summed
    /// new-investor allocations and the round's issued shares. Absent:
    /// rounding drift is accepted silently.
    #[serde(default)]
    pub drift_tolerance: Option<u64>,
}

impl SimulationConfig {
    /// Engine options derived from this config
    pub fn dilution_options(&self) -> DilutionOptions {
        DilutionOptions {
            drift_tolerance: self.drift_tolerance,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Top-level configuration
///
/// Hierarchy (highest priority first): CLI flags, `CAPTABLE_*` environment
/// variables, `captable.toml` in the working directory, the user config at
/// `<config dir>/captable/config.toml`, built-in defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from a specific TOML file
    pub fn load(path: &Path) -> CaptableResult<Self> {
        loader::load(path)
    }

    /// Load from a TOML file, collecting unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> CaptableResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory, the user config dir, or defaults
    pub fn load_or_default(cwd: Option<&Path>) -> Self {
        loader::load_or_default(cwd)
    }
}
