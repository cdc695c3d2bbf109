//! The reference Series B scenario: 10M shares outstanding, raise $5M at
//! $20M pre. The new money buys 20% of the post-money company, so 2.5M
//! shares are issued and every holder is diluted by a fifth of its stake.

use chrono::{TimeZone, Utc};

use captable::{
    sample_structure, simulate_round, vested_shares, NewInvestor, ScenarioInput,
    VestingSchedule,
};

#[test]
fn series_b_reference_numbers() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let structure = sample_structure(now);
    assert_eq!(structure.total_shares, 10_000_000);

    let input = ScenarioInput {
        round_name: "Series B".to_string(),
        raise_amount: 5_000_000.0,
        pre_money: 20_000_000.0,
        new_investors: vec![NewInvestor {
            name: "X".to_string(),
            investment: 5_000_000.0,
        }],
    };

    let result = simulate_round(&structure, &input, now).unwrap();

    assert_eq!(result.post_money, 25_000_000.0);
    assert_eq!(result.new_shares, 2_500_000);
    assert_eq!(result.new.total_shares, 12_500_000);

    // Alice: 4M of 10M (40%) becomes 4M of 12.5M (32%); 8 points diluted.
    let alice_before = structure.shareholder("1").unwrap();
    let alice_after = result.new.shareholder("1").unwrap();
    assert_eq!(alice_before.total_percentage, 40.0);
    assert_eq!(alice_after.total_shares, 4_000_000);
    assert!((alice_after.total_percentage - 32.0).abs() < 1e-9);
    assert!((result.dilution_percentages["1"] - 8.0).abs() < 1e-9);

    // With an exactly subscribed round, the new snapshot stays consistent.
    assert!(result.new.check_invariants().is_empty());
}

#[test]
fn series_b_vesting_boundaries() {
    let schedule = VestingSchedule::new(
        4_000_000,
        12,
        48,
        chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    );

    assert_eq!(vested_shares(&schedule, 6), 0);
    assert_eq!(vested_shares(&schedule, 24), 2_000_000);
    assert_eq!(vested_shares(&schedule, 60), 4_000_000);
}
