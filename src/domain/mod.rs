//! Domain Layer
//!
//! This is the core of Captable - pure business logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Shareholder, Instrument,
//!   OwnershipStructure, FinancingRound)
//! - `value_objects/` - Immutable value types (VestingSchedule)
//! - `services/` - Domain services (dilution engine, vesting calculator,
//!   timeline view)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network
//! 2. **Pure Functions** - Services are stateless; "now" is always an
//!    explicit parameter, never read from the clock
//! 3. **Immutable snapshots** - Simulations build fresh structures instead
//!    of mutating their inputs

pub mod entities;
pub mod services;
pub mod value_objects;
