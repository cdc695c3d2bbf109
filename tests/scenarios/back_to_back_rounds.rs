//! Chained rounds: the snapshot a simulation produces is a valid input for
//! the next simulation, and dilution compounds across rounds.

use chrono::{TimeZone, Utc};

use captable::{sample_structure, simulate_round, NewInvestor, RoundKind, ScenarioInput};

#[test]
fn simulated_snapshot_feeds_the_next_round() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let structure = sample_structure(now);

    let series_b = ScenarioInput {
        round_name: "Series B".to_string(),
        raise_amount: 5_000_000.0,
        pre_money: 20_000_000.0,
        new_investors: vec![NewInvestor {
            name: "Growth Fund X".to_string(),
            investment: 5_000_000.0,
        }],
    };
    let after_b = simulate_round(&structure, &series_b, now).unwrap();

    let later = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
    let series_c = ScenarioInput {
        round_name: "Series C".to_string(),
        raise_amount: 10_000_000.0,
        pre_money: 90_000_000.0,
        new_investors: vec![NewInvestor {
            name: "Crossover Fund".to_string(),
            investment: 10_000_000.0,
        }],
    };
    let after_c = simulate_round(&after_b.new, &series_c, later).unwrap();

    // 10% of post bought: 12.5M / 9 = 1,388,889 new shares.
    assert_eq!(after_c.new_shares, 1_388_889);
    assert_eq!(after_c.new.total_shares, 13_888_889);

    // Alice: 40% -> 32% -> 28.8%.
    let alice = after_c.new.shareholder("1").unwrap();
    assert!((alice.total_percentage - 28.8).abs() < 1e-4);

    // The Series B investor is an existing holder now and gets diluted too.
    let fund_x = after_c.new.shareholder("new-investor-0").unwrap();
    assert_eq!(fund_x.total_shares, 2_500_000);
    assert!(after_c.dilution_percentages.contains_key("new-investor-0"));
    assert!(after_c.dilution_percentages["new-investor-0"] > 0.0);

    // Round history accumulates, and the kind advances.
    assert_eq!(after_c.new.financing_rounds.len(), 3);
    assert_eq!(
        after_c.new.financing_rounds.last().unwrap().kind,
        RoundKind::SeriesC
    );
}
