//! Calculation logic for the payroll settlement engine.
//!
//! This module contains the pure functions that derive per-unit values
//! from an employee's effective salary and the legal configuration,
//! validate period novelties, and produce an itemized settlement.

mod money;
mod rates;
mod settlement;
mod validate;

pub use money::round_money;
pub use rates::UnitValues;
pub use settlement::{compute_monthly_settlement, compute_settlement};
pub use validate::{validate_config, validate_inputs};
