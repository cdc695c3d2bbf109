//! Captable - cap table modeling and dilution scenario tool
//!
//! Captable models a company's equity ownership (shareholders, instruments,
//! vesting schedules, financing history) and simulates the dilutive effect
//! of a new priced round on every existing holder.
//!
//! The domain layer is pure: simulations take the current snapshot, the
//! scenario input, and an explicit "now", and return a fresh snapshot plus
//! the per-holder dilution delta. All I/O lives in the binary.

pub mod config;
pub mod domain;
pub mod error;
pub mod sample;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{
    FinancingRound, Instrument, InstrumentKind, InvariantViolation, OwnershipStructure,
    RoundKind, Shareholder, ShareholderKind,
};
pub use domain::services::{
    simulate_round, simulate_round_with, vested_shares, vesting_progress_at, vesting_timeline,
    DilutionOptions, DilutionResult, HolderVesting, NewInvestor, ScenarioInput, TimelinePoint,
};
pub use domain::value_objects::VestingSchedule;
pub use error::{CaptableError, CaptableResult};
pub use sample::sample_structure;

use std::path::Path;

/// Load an ownership structure from a JSON file in the camelCase wire shape
pub fn load_structure(path: &Path) -> CaptableResult<OwnershipStructure> {
    let content = std::fs::read_to_string(path)?;
    let structure = serde_json::from_str(&content)?;
    Ok(structure)
}
