//! Equity instruments
//!
//! A single grant held by exactly one shareholder: stock, options, warrants,
//! or a convertible (note / SAFE). Convertibles are carried for display only;
//! the dilution engine never converts them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VestingSchedule;

/// Kind of equity instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    CommonStock,
    PreferredStock,
    Option,
    Warrant,
    ConvertibleNote,
    Safe,
}

impl InstrumentKind {
    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            InstrumentKind::CommonStock => "Common Stock",
            InstrumentKind::PreferredStock => "Preferred Stock",
            InstrumentKind::Option => "Option",
            InstrumentKind::Warrant => "Warrant",
            InstrumentKind::ConvertibleNote => "Convertible Note",
            InstrumentKind::Safe => "SAFE",
        }
    }
}

/// A single equity grant
///
/// `percentage` is derived from `shares` against the owning structure's
/// total; the dilution engine recomputes it on every simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Unique identifier within the structure
    pub id: String,

    /// Kind of grant
    #[serde(rename = "type")]
    pub kind: InstrumentKind,

    /// Number of shares granted
    pub shares: u64,

    /// Percentage of the structure's total shares
    pub percentage: f64,

    /// Strike price (options and warrants only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_price: Option<f64>,

    /// Vesting schedule, if the grant vests over time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_schedule: Option<VestingSchedule>,

    /// Date the grant was issued
    pub issue_date: NaiveDate,

    /// Free-text annotation (e.g. round name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Instrument {
    /// Create an unvested grant with no strike price or notes
    pub fn new(
        id: impl Into<String>,
        kind: InstrumentKind,
        shares: u64,
        percentage: f64,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            shares,
            percentage,
            strike_price: None,
            vesting_schedule: None,
            issue_date,
            notes: None,
        }
    }
}
