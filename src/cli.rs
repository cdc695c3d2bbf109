use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use captable::NewInvestor;

/// Captable - cap table modeling and dilution scenario tool
#[derive(Parser, Debug)]
#[command(name = "captable")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'captable show' without --file for the built-in sample company.")]
pub struct Cli {
    /// Emit a JSON document instead of the rendered view
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the cap table (holders, instruments, financing history)
    Show {
        /// Ownership structure JSON file (defaults to the sample company)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Simulate a priced financing round and report per-holder dilution
    Simulate {
        /// Amount raised in the round
        #[arg(long)]
        raise: f64,

        /// Pre-money valuation
        #[arg(long)]
        pre_money: f64,

        /// Name recorded on the simulated round
        #[arg(long, default_value = "New Round")]
        round_name: String,

        /// New investor as NAME=AMOUNT (repeatable, processed in order)
        #[arg(long = "investor", value_parser = parse_investor)]
        investors: Vec<NewInvestor>,

        /// Ownership structure JSON file (defaults to the sample company)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Fix "now" to this date for reproducible output (YYYY-MM-DD)
        #[arg(long)]
        at: Option<NaiveDate>,
    },

    /// Show vesting progress, milestones, and the sampled timeline
    Timeline {
        /// Timeline length
        #[arg(long, value_enum, default_value_t = Timeframe::FourYears)]
        timeframe: Timeframe,

        /// Timeline origin (defaults to the earliest vesting start date)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Ownership structure JSON file (defaults to the sample company)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Evaluate progress as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        at: Option<NaiveDate>,
    },

    /// Check the structure's internal consistency invariants
    Check {
        /// Ownership structure JSON file (defaults to the sample company)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    #[value(name = "1y")]
    OneYear,
    #[value(name = "2y")]
    TwoYears,
    #[value(name = "4y")]
    FourYears,
}

impl Timeframe {
    pub fn months(self) -> u32 {
        match self {
            Timeframe::OneYear => 12,
            Timeframe::TwoYears => 24,
            Timeframe::FourYears => 48,
        }
    }
}

/// Parse `NAME=AMOUNT` into a `NewInvestor`
fn parse_investor(raw: &str) -> Result<NewInvestor, String> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("investor name must not be empty".to_string());
    }
    let investment: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("invalid investment amount '{}'", amount.trim()))?;
    Ok(NewInvestor {
        name: name.to_string(),
        investment,
    })
}
