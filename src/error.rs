//! Error types for Captable
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Captable operations
pub type CaptableResult<T> = Result<T, CaptableError>;

/// Main error type for Captable operations
#[derive(Error, Debug)]
pub enum CaptableError {
    /// Scenario input rejected before any computation
    #[error("invalid scenario: {field} must be positive (got {value})")]
    InvalidScenario { field: &'static str, value: f64 },

    /// Simulation over a structure with no shares outstanding
    #[error("ownership structure for '{company}' has no shares outstanding")]
    EmptyStructure { company: String },

    /// Round parameters whose issuance pushes the share count past what
    /// `u64` can represent
    #[error("share overflow: the simulated round for '{company}' would issue more shares than can be counted")]
    ShareOverflow { company: String },

    /// Strict mode only: investor allocations drifted too far from the
    /// round's issued share count
    #[error(
        "allocated investor shares ({allocated}) deviate from issued shares ({expected}) by more than {tolerance}"
    )]
    AllocationDrift {
        allocated: u64,
        expected: u64,
        tolerance: u64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (ownership structure files)
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
