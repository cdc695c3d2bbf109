//! Domain Entities
//!
//! Core domain entities with identity inside a structure:
//! - `Shareholder` - a holder of equity instruments
//! - `Instrument` - a single grant
//! - `OwnershipStructure` - the aggregate root snapshot
//! - `FinancingRound` - historical record of a priced round

mod instrument;
mod shareholder;
mod structure;

pub use instrument::{Instrument, InstrumentKind};
pub use shareholder::{Shareholder, ShareholderKind};
pub use structure::{FinancingRound, InvariantViolation, OwnershipStructure, RoundKind};
