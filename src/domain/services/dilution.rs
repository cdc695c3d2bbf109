//! Dilution engine
//!
//! Pure simulation of a single priced financing round: given a current
//! ownership snapshot and the round parameters, produce a fresh snapshot
//! with recomputed percentages, the new investors appended, and the
//! per-holder dilution delta. The input structure is never mutated.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    FinancingRound, Instrument, InstrumentKind, OwnershipStructure, RoundKind, Shareholder,
    ShareholderKind,
};
use crate::error::{CaptableError, CaptableResult};

/// A new investor participating in the simulated round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub name: String,
    /// Amount invested; must be positive but need not sum to the round's
    /// raise across investors
    pub investment: f64,
}

/// User-specified round parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub round_name: String,
    pub raise_amount: f64,
    pub pre_money: f64,
    pub new_investors: Vec<NewInvestor>,
}

/// Knobs for a single simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DilutionOptions {
    /// When set, fail with `AllocationDrift` if the summed new-investor
    /// allocations deviate from the issued share count by more than this
    /// many shares. `None` (the default) accepts the rounding drift.
    pub drift_tolerance: Option<u64>,
}

/// Outcome of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DilutionResult {
    /// Snapshot the simulation started from
    pub original: OwnershipStructure,

    /// Snapshot after the round: diluted percentages, new investors
    /// appended, the simulated round recorded
    pub new: OwnershipStructure,

    /// Shares issued in the simulated round
    pub new_shares: u64,

    /// Post-money valuation
    pub post_money: f64,

    /// Per-shareholder dilution in percentage points (original minus new;
    /// positive means diluted). Keyed by shareholder id; holders created
    /// by the round are absent.
    pub dilution_percentages: BTreeMap<String, f64>,
}

/// Simulate a priced round with default options
///
/// `now` is injected rather than read from the clock so identical inputs
/// produce identical results.
pub fn simulate_round(
    current: &OwnershipStructure,
    input: &ScenarioInput,
    now: DateTime<Utc>,
) -> CaptableResult<DilutionResult> {
    simulate_round_with(current, input, now, DilutionOptions::default())
}

/// Simulate a priced round
///
/// Fails with `InvalidScenario` when the raise, pre-money, or any
/// investment is not positive, with `EmptyStructure` when the snapshot has
/// no shares outstanding, and with `ShareOverflow` when the issuance
/// exceeds what `u64` share counts can hold. Share counts round to the
/// nearest whole share at the two
/// allocation points (round issuance, per-investor allocation); the
/// resulting drift is accepted unless `options.drift_tolerance` says
/// otherwise.
pub fn simulate_round_with(
    current: &OwnershipStructure,
    input: &ScenarioInput,
    now: DateTime<Utc>,
    options: DilutionOptions,
) -> CaptableResult<DilutionResult> {
    if input.raise_amount <= 0.0 {
        return Err(CaptableError::InvalidScenario {
            field: "raiseAmount",
            value: input.raise_amount,
        });
    }
    if input.pre_money <= 0.0 {
        return Err(CaptableError::InvalidScenario {
            field: "preMoney",
            value: input.pre_money,
        });
    }
    for investor in &input.new_investors {
        if investor.investment <= 0.0 {
            return Err(CaptableError::InvalidScenario {
                field: "investment",
                value: investor.investment,
            });
        }
    }
    if current.total_shares == 0 {
        return Err(CaptableError::EmptyStructure {
            company: current.company_name.clone(),
        });
    }

    let post_money = input.pre_money + input.raise_amount;
    // The new money buys fraction f = raise / post of the enlarged pool;
    // solving N / (T + N) = f for N gives the issuance below. When the
    // raise dwarfs the pre-money, f rounds to 1.0 in f64 and the quotient
    // blows up; that and any issuance past u64 range are rejected rather
    // than allowed to saturate.
    let fraction = input.raise_amount / post_money;
    let issuance = fraction * current.total_shares as f64 / (1.0 - fraction);
    if !issuance.is_finite() || issuance >= u64::MAX as f64 {
        return Err(CaptableError::ShareOverflow {
            company: current.company_name.clone(),
        });
    }
    let new_shares = issuance.round() as u64;
    let new_total_shares = current
        .total_shares
        .checked_add(new_shares)
        .ok_or_else(|| CaptableError::ShareOverflow {
            company: current.company_name.clone(),
        })?;

    // Existing holders keep their share counts; only percentages move.
    let mut shareholders: Vec<Shareholder> = current
        .shareholders
        .iter()
        .map(|holder| {
            let mut diluted = holder.clone();
            for instrument in &mut diluted.instruments {
                instrument.percentage =
                    instrument.shares as f64 / new_total_shares as f64 * 100.0;
            }
            diluted.total_percentage =
                diluted.total_shares as f64 / new_total_shares as f64 * 100.0;
            diluted
        })
        .collect();

    // Each investor's allocation uses its own investment/raise ratio,
    // independent of the other investors. Never renormalized: if the
    // investments don't sum to the raise, the allocations won't sum to
    // new_shares either.
    let mut allocated: u64 = 0;
    let mut round_investor_ids = Vec::with_capacity(input.new_investors.len());
    for (index, investor) in input.new_investors.iter().enumerate() {
        let investor_shares =
            (investor.investment / input.raise_amount * new_shares as f64).round() as u64;
        let investor_percentage = investor_shares as f64 / new_total_shares as f64 * 100.0;
        allocated = allocated
            .checked_add(investor_shares)
            .ok_or_else(|| CaptableError::ShareOverflow {
                company: current.company_name.clone(),
            })?;

        let id = format!("new-investor-{index}");
        let mut instrument = Instrument::new(
            format!("new-instrument-{index}"),
            InstrumentKind::PreferredStock,
            investor_shares,
            investor_percentage,
            now.date_naive(),
        );
        instrument.notes = Some(input.round_name.clone());

        // Always appended, even when the name collides with an existing
        // holder; matching is by id only.
        shareholders.push(Shareholder {
            id: id.clone(),
            name: investor.name.clone(),
            email: None,
            kind: ShareholderKind::Investor,
            instruments: vec![instrument],
            total_shares: investor_shares,
            total_percentage: investor_percentage,
        });
        round_investor_ids.push(id);
    }

    if let Some(tolerance) = options.drift_tolerance {
        if allocated.abs_diff(new_shares) > tolerance {
            return Err(CaptableError::AllocationDrift {
                allocated,
                expected: new_shares,
                tolerance,
            });
        }
    }

    let mut financing_rounds = current.financing_rounds.clone();
    financing_rounds.push(FinancingRound {
        id: format!("round-{}", financing_rounds.len() + 1),
        name: input.round_name.clone(),
        kind: next_round_kind(current),
        amount: input.raise_amount,
        pre_money: input.pre_money,
        post_money,
        date: now.date_naive(),
        investors: round_investor_ids,
        new_shares,
    });

    let new_structure = OwnershipStructure {
        company_name: current.company_name.clone(),
        total_shares: new_total_shares,
        shareholders,
        financing_rounds,
        last_updated: now,
    };

    let mut dilution_percentages = BTreeMap::new();
    for holder in &current.shareholders {
        if let Some(diluted) = new_structure.shareholder(&holder.id) {
            dilution_percentages.insert(
                holder.id.clone(),
                holder.total_percentage - diluted.total_percentage,
            );
        }
    }

    Ok(DilutionResult {
        original: current.clone(),
        new: new_structure,
        new_shares,
        post_money,
        dilution_percentages,
    })
}

/// Pick the kind for the simulated round as the successor of the latest
/// priced (non-bridge) round already raised
fn next_round_kind(current: &OwnershipStructure) -> RoundKind {
    let latest = current
        .financing_rounds
        .iter()
        .map(|r| r.kind)
        .filter(|k| *k != RoundKind::Bridge)
        .max_by_key(|k| match k {
            RoundKind::Seed => 0,
            RoundKind::SeriesA => 1,
            RoundKind::SeriesB => 2,
            RoundKind::SeriesC => 3,
            RoundKind::Bridge => unreachable!("bridge rounds filtered above"),
        });
    match latest {
        None => RoundKind::Seed,
        Some(RoundKind::Seed) => RoundKind::SeriesA,
        Some(RoundKind::SeriesA) => RoundKind::SeriesB,
        _ => RoundKind::SeriesC,
    }
}
