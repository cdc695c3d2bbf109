//! Shareholders
//!
//! A shareholder owns an ordered collection of instruments. The aggregate
//! fields `total_shares` and `total_percentage` are derived, never edited
//! directly: `recompute_totals` is the single place they are set.

use serde::{Deserialize, Serialize};

use super::Instrument;

/// Classification of a shareholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareholderKind {
    Founder,
    Employee,
    Investor,
    Advisor,
}

impl ShareholderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShareholderKind::Founder => "Founder",
            ShareholderKind::Employee => "Employee",
            ShareholderKind::Investor => "Investor",
            ShareholderKind::Advisor => "Advisor",
        }
    }
}

/// A holder of one or more equity instruments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shareholder {
    /// Unique identifier within the structure
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Classification
    #[serde(rename = "type")]
    pub kind: ShareholderKind,

    /// Instruments held, in grant order
    pub instruments: Vec<Instrument>,

    /// Derived: sum of instrument share counts
    pub total_shares: u64,

    /// Derived: share of the structure's total, in percent
    pub total_percentage: f64,
}

impl Shareholder {
    /// Create a shareholder with derived totals computed against
    /// `structure_total_shares`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ShareholderKind,
        instruments: Vec<Instrument>,
        structure_total_shares: u64,
    ) -> Self {
        let mut holder = Self {
            id: id.into(),
            name: name.into(),
            email: None,
            kind,
            instruments,
            total_shares: 0,
            total_percentage: 0.0,
        };
        holder.recompute_totals(structure_total_shares);
        holder
    }

    /// Recompute `total_shares` from the instruments and `total_percentage`
    /// against the given structure-wide share count
    pub fn recompute_totals(&mut self, structure_total_shares: u64) {
        self.total_shares = self.instruments.iter().map(|i| i.shares).sum();
        self.total_percentage = if structure_total_shares == 0 {
            0.0
        } else {
            self.total_shares as f64 / structure_total_shares as f64 * 100.0
        };
    }

    /// First instrument carrying a vesting schedule, if any
    ///
    /// The timeline view tracks one schedule per holder, matching how the
    /// grants are modeled in practice (a founder's single vesting grant).
    pub fn vesting_instrument(&self) -> Option<&Instrument> {
        self.instruments
            .iter()
            .find(|i| i.vesting_schedule.is_some())
    }
}
