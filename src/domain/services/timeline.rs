//! Vesting timeline derived view
//!
//! Samples each vesting holder's schedule at fixed month intervals so the
//! presentation layer can chart vesting over time without re-deriving the
//! cliff/ramp rules.

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::domain::entities::OwnershipStructure;
use crate::domain::services::vesting;

/// One holder's vesting state at a timeline point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderVesting {
    pub shareholder_id: String,
    pub name: String,
    pub vested_shares: u64,
    /// Shares subject to the schedule, not the holder's overall position
    pub total_shares: u64,
    /// Vested fraction of the schedule, in percent
    pub percentage: f64,
}

/// Vesting state of every vesting holder at one sampled month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// Months after the timeline origin
    pub month: u32,
    pub date: NaiveDate,
    pub holders: Vec<HolderVesting>,
}

/// Sample the structure's vesting schedules at `0, step, 2*step, ..` months
/// from `from`, inclusive of `months`
///
/// Covers each shareholder's first vesting instrument; holders without one
/// are skipped. The month offset is fed straight into the vesting
/// calculator, so the sampling is relative to each schedule's own ramp.
pub fn vesting_timeline(
    structure: &OwnershipStructure,
    from: NaiveDate,
    months: u32,
    step: u32,
) -> Vec<TimelinePoint> {
    let step = step.max(1);
    let mut points = Vec::new();

    let mut month = 0;
    while month <= months {
        let date = from + Months::new(month);
        let holders = structure
            .vesting_shareholders()
            .filter_map(|holder| {
                let schedule = holder.vesting_instrument()?.vesting_schedule.as_ref()?;
                let vested = vesting::vested_shares(schedule, month);
                Some(HolderVesting {
                    shareholder_id: holder.id.clone(),
                    name: holder.name.clone(),
                    vested_shares: vested,
                    total_shares: schedule.total_shares,
                    percentage: if schedule.total_shares == 0 {
                        0.0
                    } else {
                        vested as f64 / schedule.total_shares as f64 * 100.0
                    },
                })
            })
            .collect();

        points.push(TimelinePoint {
            month,
            date,
            holders,
        });
        month += step;
    }

    points
}
