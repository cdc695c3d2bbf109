//! Property tests for the dilution engine.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use captable::{
    simulate_round, Instrument, InstrumentKind, NewInvestor, OwnershipStructure, ScenarioInput,
    Shareholder, ShareholderKind,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

/// Build a structure from per-holder share counts (ids "0", "1", ..).
fn structure_from_holdings(holdings: &[u64]) -> OwnershipStructure {
    let total: u64 = holdings.iter().sum();
    let issue = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    let shareholders = holdings
        .iter()
        .enumerate()
        .map(|(i, &shares)| {
            Shareholder::new(
                i.to_string(),
                format!("Holder {i}"),
                ShareholderKind::Founder,
                vec![Instrument::new(
                    format!("{i}-1"),
                    InstrumentKind::CommonStock,
                    shares,
                    0.0,
                    issue,
                )],
                total,
            )
        })
        .collect();

    OwnershipStructure {
        company_name: "PropCo".to_string(),
        total_shares: total,
        shareholders,
        financing_rounds: Vec::new(),
        last_updated: fixed_now(),
    }
}

fn holdings_strategy() -> impl Strategy<Value = Vec<u64>> {
    // At least one holder with at least one share; totals kept well inside
    // f64's exact-integer range.
    proptest::collection::vec(1u64..=50_000_000, 1..=8)
}

fn scenario_strategy() -> impl Strategy<Value = ScenarioInput> {
    // Investments are generated as a share of the raise (up to 2x) so the
    // strategy covers matched, under- and over-subscribed rounds without
    // producing astronomically mismatched allocations.
    (
        1e4f64..=1e9,
        1e5f64..=1e10,
        proptest::collection::vec((".{1,12}", 0.01f64..=2.0), 0..=4),
    )
        .prop_map(|(raise_amount, pre_money, investors)| ScenarioInput {
            round_name: "Prop Round".to_string(),
            raise_amount,
            pre_money,
            new_investors: investors
                .into_iter()
                .map(|(name, share_of_raise)| NewInvestor {
                    name,
                    investment: share_of_raise * raise_amount,
                })
                .collect(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: existing holders keep their share counts; only percentages
    /// move.
    #[test]
    fn property_existing_share_counts_unchanged(
        holdings in holdings_strategy(),
        input in scenario_strategy(),
    ) {
        let structure = structure_from_holdings(&holdings);
        let result = simulate_round(&structure, &input, fixed_now()).unwrap();

        for holder in &structure.shareholders {
            let diluted = result.new.shareholder(&holder.id).unwrap();
            prop_assert_eq!(diluted.total_shares, holder.total_shares);
        }
    }

    /// PROPERTY: the new total is the old total plus the issued shares.
    #[test]
    fn property_new_total_is_old_plus_issued(
        holdings in holdings_strategy(),
        input in scenario_strategy(),
    ) {
        let structure = structure_from_holdings(&holdings);
        let result = simulate_round(&structure, &input, fixed_now()).unwrap();

        prop_assert_eq!(
            result.new.total_shares,
            structure.total_shares + result.new_shares
        );
    }

    /// PROPERTY: a positive raise never dilutes an existing holder
    /// negatively.
    #[test]
    fn property_dilution_is_non_negative(
        holdings in holdings_strategy(),
        input in scenario_strategy(),
    ) {
        let structure = structure_from_holdings(&holdings);
        let result = simulate_round(&structure, &input, fixed_now()).unwrap();

        for (id, dilution) in &result.dilution_percentages {
            prop_assert!(
                *dilution >= 0.0,
                "holder {} has negative dilution {}",
                id,
                dilution
            );
        }
    }

    /// PROPERTY: every existing holder appears in the dilution map, and no
    /// appended investor does.
    #[test]
    fn property_dilution_map_covers_exactly_the_original_holders(
        holdings in holdings_strategy(),
        input in scenario_strategy(),
    ) {
        let structure = structure_from_holdings(&holdings);
        let result = simulate_round(&structure, &input, fixed_now()).unwrap();

        prop_assert_eq!(
            result.dilution_percentages.len(),
            structure.shareholders.len()
        );
        for holder in &structure.shareholders {
            prop_assert!(result.dilution_percentages.contains_key(&holder.id));
        }
    }

    /// PROPERTY: identical inputs with a fixed clock give structurally
    /// identical results.
    #[test]
    fn property_simulation_is_idempotent(
        holdings in holdings_strategy(),
        input in scenario_strategy(),
    ) {
        let structure = structure_from_holdings(&holdings);
        let first = simulate_round(&structure, &input, fixed_now()).unwrap();
        let second = simulate_round(&structure, &input, fixed_now()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: invalid raise or pre-money is always rejected, whatever
    /// the structure looks like.
    #[test]
    fn property_non_positive_inputs_rejected(
        holdings in holdings_strategy(),
        raise in -1e9f64..=0.0,
    ) {
        let structure = structure_from_holdings(&holdings);
        let input = ScenarioInput {
            round_name: "Bad Round".to_string(),
            raise_amount: raise,
            pre_money: 1_000_000.0,
            new_investors: Vec::new(),
        };
        prop_assert!(simulate_round(&structure, &input, fixed_now()).is_err());
    }

    /// PROPERTY: pathologically large raises either succeed with a larger
    /// total or fail cleanly; the share count never wraps.
    #[test]
    fn property_oversized_rounds_never_wrap(
        holdings in holdings_strategy(),
        raise in 1e15f64..=1e30,
    ) {
        let structure = structure_from_holdings(&holdings);
        let input = ScenarioInput {
            round_name: "Mega Round".to_string(),
            raise_amount: raise,
            pre_money: 1.0,
            new_investors: Vec::new(),
        };
        if let Ok(result) = simulate_round(&structure, &input, fixed_now()) {
            prop_assert!(result.new.total_shares >= structure.total_shares);
        }
    }
}
