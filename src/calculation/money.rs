//! Money rounding.
//!
//! Every currency field a settlement reports is rounded to 2 decimal
//! places using round-half-away-from-zero on cents. Intermediate
//! accumulation stays in full precision; rounding happens once, at the
//! point of output.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("233333.33333").unwrap();
/// assert_eq!(round_money(value), Decimal::from_str("233333.33").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
