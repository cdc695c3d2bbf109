//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod vesting_schedule;

pub use vesting_schedule::VestingSchedule;
