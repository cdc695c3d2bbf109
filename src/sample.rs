//! Built-in sample ownership structure
//!
//! A small post-Series-A company used by the CLI when no input file is
//! given, and by tests as a realistic fixture: two vesting founders, one
//! institutional investor, and an option pool.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{
    FinancingRound, Instrument, InstrumentKind, OwnershipStructure, RoundKind, Shareholder,
    ShareholderKind,
};
use crate::domain::value_objects::VestingSchedule;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

/// Build the sample structure with the given `last_updated` timestamp
pub fn sample_structure(last_updated: DateTime<Utc>) -> OwnershipStructure {
    const TOTAL: u64 = 10_000_000;
    let founded = date(2023, 1, 1);

    let mut alice_grant = Instrument::new("1-1", InstrumentKind::CommonStock, 4_000_000, 40.0, founded);
    alice_grant.vesting_schedule = Some(VestingSchedule {
        total_shares: 4_000_000,
        cliff_months: 12,
        vesting_months: 48,
        start_date: founded,
        vested_shares: 1_000_000,
    });
    let mut alice = Shareholder::new(
        "1",
        "Alice Johnson",
        ShareholderKind::Founder,
        vec![alice_grant],
        TOTAL,
    );
    alice.email = Some("alice@techcorp.com".to_string());

    let mut bob_grant = Instrument::new("2-1", InstrumentKind::CommonStock, 3_000_000, 30.0, founded);
    bob_grant.vesting_schedule = Some(VestingSchedule {
        total_shares: 3_000_000,
        cliff_months: 12,
        vesting_months: 48,
        start_date: founded,
        vested_shares: 750_000,
    });
    let mut bob = Shareholder::new(
        "2",
        "Bob Smith",
        ShareholderKind::Founder,
        vec![bob_grant],
        TOTAL,
    );
    bob.email = Some("bob@techcorp.com".to_string());

    let mut vc_grant = Instrument::new(
        "3-1",
        InstrumentKind::PreferredStock,
        2_000_000,
        20.0,
        date(2023, 6, 1),
    );
    vc_grant.notes = Some("Series A Preferred".to_string());
    let mut vc = Shareholder::new(
        "3",
        "Venture Capital Fund",
        ShareholderKind::Investor,
        vec![vc_grant],
        TOTAL,
    );
    vc.email = Some("contact@vcfund.com".to_string());

    let mut pool_grant = Instrument::new("4-1", InstrumentKind::Option, 1_000_000, 10.0, founded);
    pool_grant.strike_price = Some(0.10);
    pool_grant.notes = Some("Employee Stock Option Pool".to_string());
    let pool = Shareholder::new(
        "4",
        "Employee Option Pool",
        ShareholderKind::Employee,
        vec![pool_grant],
        TOTAL,
    );

    OwnershipStructure {
        company_name: "TechCorp Inc.".to_string(),
        total_shares: TOTAL,
        shareholders: vec![alice, bob, vc, pool],
        financing_rounds: vec![FinancingRound {
            id: "round-1".to_string(),
            name: "Series A".to_string(),
            kind: RoundKind::SeriesA,
            amount: 2_000_000.0,
            pre_money: 8_000_000.0,
            post_money: 10_000_000.0,
            date: date(2023, 6, 1),
            investors: vec!["3".to_string()],
            new_shares: 2_000_000,
        }],
        last_updated,
    }
}
