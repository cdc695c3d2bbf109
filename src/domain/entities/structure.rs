//! Ownership structure aggregate
//!
//! `OwnershipStructure` is the aggregate root the rest of the crate works
//! over: an immutable snapshot of who holds what. The dilution engine never
//! mutates one in place; each simulation builds a fresh snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Shareholder;

/// Kind of financing round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    Bridge,
}

impl RoundKind {
    pub fn label(&self) -> &'static str {
        match self {
            RoundKind::Seed => "Seed",
            RoundKind::SeriesA => "Series A",
            RoundKind::SeriesB => "Series B",
            RoundKind::SeriesC => "Series C",
            RoundKind::Bridge => "Bridge",
        }
    }
}

/// Historical record of a priced financing round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingRound {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RoundKind,
    /// Amount raised
    pub amount: f64,
    pub pre_money: f64,
    /// Invariant: `post_money == pre_money + amount`
    pub post_money: f64,
    pub date: NaiveDate,
    /// Shareholder IDs of the round's investors
    pub investors: Vec<String>,
    /// Shares issued in this round
    pub new_shares: u64,
}

/// A detected inconsistency inside an ownership structure
///
/// These are reported by `check_invariants`, not panics: input files are
/// user-authored and the CLI surfaces violations as a readable list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvariantViolation {
    /// Id of the entity the violation concerns (shareholder, instrument,
    /// or round id; the company name for structure-level checks)
    pub subject: String,
    pub message: String,
}

/// Immutable snapshot of a company's equity ownership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipStructure {
    pub company_name: String,

    /// Invariant: equals the sum of all shareholders' `total_shares`
    pub total_shares: u64,

    /// Holders in display order
    pub shareholders: Vec<Shareholder>,

    /// Priced rounds raised to date, oldest first
    #[serde(default)]
    pub financing_rounds: Vec<FinancingRound>,

    pub last_updated: DateTime<Utc>,
}

impl OwnershipStructure {
    /// Look up a shareholder by id
    pub fn shareholder(&self, id: &str) -> Option<&Shareholder> {
        self.shareholders.iter().find(|s| s.id == id)
    }

    /// Holders that have at least one vesting grant, in display order
    pub fn vesting_shareholders(&self) -> impl Iterator<Item = &Shareholder> {
        self.shareholders
            .iter()
            .filter(|s| s.vesting_instrument().is_some())
    }

    /// Check the structural invariants, returning every violation found
    ///
    /// Checks: structure total equals the sum of shareholder totals, each
    /// shareholder total equals the sum of its instruments, round post-money
    /// arithmetic, and vested-share bounds on every schedule.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        let holder_sum: u64 = self.shareholders.iter().map(|s| s.total_shares).sum();
        if holder_sum != self.total_shares {
            violations.push(InvariantViolation {
                subject: self.company_name.clone(),
                message: format!(
                    "structure totalShares is {} but shareholders sum to {}",
                    self.total_shares, holder_sum
                ),
            });
        }

        for holder in &self.shareholders {
            let instrument_sum: u64 = holder.instruments.iter().map(|i| i.shares).sum();
            if instrument_sum != holder.total_shares {
                violations.push(InvariantViolation {
                    subject: holder.id.clone(),
                    message: format!(
                        "shareholder '{}' totalShares is {} but instruments sum to {}",
                        holder.name, holder.total_shares, instrument_sum
                    ),
                });
            }

            for instrument in &holder.instruments {
                if let Some(vesting) = &instrument.vesting_schedule {
                    if vesting.vested_shares > vesting.total_shares {
                        violations.push(InvariantViolation {
                            subject: instrument.id.clone(),
                            message: format!(
                                "instrument '{}' has {} vested of {} total",
                                instrument.id, vesting.vested_shares, vesting.total_shares
                            ),
                        });
                    }
                }
            }
        }

        for round in &self.financing_rounds {
            let expected = round.pre_money + round.amount;
            if (round.post_money - expected).abs() > f64::EPSILON * expected.abs() {
                violations.push(InvariantViolation {
                    subject: round.id.clone(),
                    message: format!(
                        "round '{}' postMoney is {} but preMoney + amount is {}",
                        round.name, round.post_money, expected
                    ),
                });
            }
        }

        violations
    }
}
