//! Property tests for the vesting calculator.

use chrono::NaiveDate;
use proptest::prelude::*;

use captable::domain::services::vesting::{
    months_between, vested_shares, vesting_progress_at,
};
use captable::VestingSchedule;

fn schedule_strategy() -> impl Strategy<Value = VestingSchedule> {
    // Cliff never exceeds the vesting duration, as in any real grant.
    (
        1u64..=100_000_000,
        0u32..=24,
        0u32..=96,
        2000i32..=2030,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(total, cliff, extra, year, month, day)| {
            VestingSchedule::new(
                total,
                cliff,
                (cliff + extra).max(1),
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: vested shares never leave `[0, total_shares]`.
    #[test]
    fn property_vested_within_bounds(
        schedule in schedule_strategy(),
        months in 0u32..=240,
    ) {
        let vested = vested_shares(&schedule, months);
        prop_assert!(vested <= schedule.total_shares);
    }

    /// PROPERTY: strictly zero before the cliff, exactly the full grant at
    /// or beyond the vesting end.
    #[test]
    fn property_cliff_and_full_vest_endpoints(schedule in schedule_strategy()) {
        if schedule.cliff_months > 0 {
            prop_assert_eq!(vested_shares(&schedule, schedule.cliff_months - 1), 0);
        }
        prop_assert_eq!(
            vested_shares(&schedule, schedule.vesting_months),
            schedule.total_shares
        );
        prop_assert_eq!(
            vested_shares(&schedule, schedule.vesting_months + 60),
            schedule.total_shares
        );
    }

    /// PROPERTY: vesting is monotone in elapsed time.
    #[test]
    fn property_vesting_is_monotone(
        schedule in schedule_strategy(),
        a in 0u32..=240,
        b in 0u32..=240,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(vested_shares(&schedule, lo) <= vested_shares(&schedule, hi));
    }

    /// PROPERTY: progress is a fraction in [0, 1] for any date.
    #[test]
    fn property_progress_within_unit_interval(
        schedule in schedule_strategy(),
        year in 1990i32..=2040,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let as_of = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let progress = vesting_progress_at(&schedule, as_of);
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    /// PROPERTY: elapsed months depend only on year and month, never the
    /// day of month.
    #[test]
    fn property_months_between_ignores_days(
        start_year in 2000i32..=2030,
        start_month in 1u32..=12,
        day_a in 1u32..=28,
        day_b in 1u32..=28,
        offset in 0u32..=120,
    ) {
        let a = NaiveDate::from_ymd_opt(start_year, start_month, day_a).unwrap();
        let b = NaiveDate::from_ymd_opt(start_year, start_month, day_b).unwrap();
        let later = NaiveDate::from_ymd_opt(
            start_year + (offset / 12) as i32,
            (start_month - 1 + offset % 12) % 12 + 1,
            15,
        )
        .unwrap();

        prop_assert_eq!(months_between(a, later), months_between(b, later));
    }
}
