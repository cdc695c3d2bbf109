//! Vesting calculator
//!
//! Pure functions over a `VestingSchedule`: nothing vests before the cliff,
//! then a linear ramp to full vest. No acceleration, no backloading, no
//! per-tranche schedules.

use chrono::{Datelike, NaiveDate};

use crate::domain::value_objects::VestingSchedule;

/// Shares vested after `months_elapsed` whole months
///
/// Returns `0` before the cliff (no partial credit), then
/// `floor(total_shares * elapsed / vesting_months)` capped at the total.
pub fn vested_shares(schedule: &VestingSchedule, months_elapsed: u32) -> u64 {
    if months_elapsed < schedule.cliff_months {
        return 0;
    }

    let progress = (months_elapsed as f64 / schedule.vesting_months as f64).min(1.0);
    (schedule.total_shares as f64 * progress).floor() as u64
}

/// Vesting progress as of a date, as a fraction in `[0, 1]`
///
/// Elapsed time is counted in whole calendar months; the day of month is
/// ignored (Jan 31 to Feb 1 counts as one month). This imprecision is
/// deliberate and pinned by tests; do not "fix" it to day-granular math.
pub fn vesting_progress_at(schedule: &VestingSchedule, as_of: NaiveDate) -> f64 {
    let elapsed = months_between(schedule.start_date, as_of);
    if elapsed < schedule.cliff_months {
        return 0.0;
    }

    (elapsed as f64 / schedule.vesting_months as f64).min(1.0)
}

/// Whole calendar months from `start` to `as_of`, clamped at zero
///
/// Computed as the `year * 12 + month` difference, so the day of month
/// never contributes.
pub fn months_between(start: NaiveDate, as_of: NaiveDate) -> u32 {
    let start_index = start.year() * 12 + start.month0() as i32;
    let as_of_index = as_of.year() * 12 + as_of.month0() as i32;
    (as_of_index - start_index).max(0) as u32
}

/// Refresh the cached `vested_shares` snapshot as of a date
pub fn refresh_snapshot(schedule: &VestingSchedule, as_of: NaiveDate) -> VestingSchedule {
    let elapsed = months_between(schedule.start_date, as_of);
    VestingSchedule {
        vested_shares: vested_shares(schedule, elapsed),
        ..schedule.clone()
    }
}
