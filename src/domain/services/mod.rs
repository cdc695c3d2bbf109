//! Domain Services
//!
//! Stateless, pure computations over the entities:
//! - `dilution` - the financing-round simulation engine
//! - `vesting` - cliff/linear vesting calculator
//! - `timeline` - sampled vesting view for charting

pub mod dilution;
pub mod timeline;
pub mod vesting;

pub use dilution::{
    simulate_round, simulate_round_with, DilutionOptions, DilutionResult, NewInvestor,
    ScenarioInput,
};
pub use timeline::{vesting_timeline, HolderVesting, TimelinePoint};
pub use vesting::{months_between, refresh_snapshot, vested_shares, vesting_progress_at};
