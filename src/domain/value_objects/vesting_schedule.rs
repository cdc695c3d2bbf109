//! Vesting Schedule Value Object
//!
//! Cliff-then-linear vesting terms for a grant, plus derived milestone
//! dates. Immutable: `vested_shares` is a cached snapshot recomputed by the
//! vesting calculator, never edited in place.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Vesting terms: nothing vests before the cliff, then linearly to full
/// vest over `vesting_months`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingSchedule {
    /// Shares subject to vesting
    pub total_shares: u64,

    /// Months before any shares vest
    pub cliff_months: u32,

    /// Months from start to full vest (linear ramp)
    pub vesting_months: u32,

    /// Vesting commencement date
    pub start_date: NaiveDate,

    /// Cached snapshot of shares vested as of `start_date + N months`;
    /// refreshed by the vesting calculator
    pub vested_shares: u64,
}

impl VestingSchedule {
    /// Create a schedule with a zero vested-shares snapshot
    pub fn new(total_shares: u64, cliff_months: u32, vesting_months: u32, start_date: NaiveDate) -> Self {
        Self {
            total_shares,
            cliff_months,
            vesting_months,
            start_date,
            vested_shares: 0,
        }
    }

    /// Date the cliff lapses (calendar-month addition, end-of-month clamped)
    pub fn cliff_date(&self) -> NaiveDate {
        self.start_date + Months::new(self.cliff_months)
    }

    /// Date the grant is fully vested
    pub fn full_vest_date(&self) -> NaiveDate {
        self.start_date + Months::new(self.vesting_months)
    }

    /// Whether the cliff has lapsed as of `as_of`
    pub fn is_cliff_passed(&self, as_of: NaiveDate) -> bool {
        as_of > self.cliff_date()
    }

    /// Whether the grant is fully vested as of `as_of`
    pub fn is_fully_vested(&self, as_of: NaiveDate) -> bool {
        as_of > self.full_vest_date()
    }
}
