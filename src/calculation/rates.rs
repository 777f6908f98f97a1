//! Per-unit value derivation.
//!
//! Every settlement starts from a small set of unit values derived from
//! the employee's effective salary and the legal configuration: the daily
//! value, the hourly value, the daily subsidy and deduction values, and
//! one unit value per surcharge kind.

use rust_decimal::Decimal;

use crate::config::{LegalConfig, SurchargeFactors};
use crate::models::SurchargeKind;

/// The per-unit values a settlement is priced from.
///
/// Derived once per calculation; all values stay in full precision until
/// the settlement rounds its reported fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitValues {
    /// One day of salary: effective salary / 30.
    pub daily_value: Decimal,
    /// One day of transport subsidy: monthly subsidy / 30.
    pub subsidy_daily_value: Decimal,
    /// One day of health contribution: salary x pct / 100 / 30.
    pub health_daily_value: Decimal,
    /// One day of pension contribution: salary x pct / 100 / 30.
    pub pension_daily_value: Decimal,
    /// One hour of salary: effective salary / hourly divisor.
    pub hourly_value: Decimal,
}

impl UnitValues {
    /// Derives the unit values from an effective salary and the legal
    /// configuration.
    ///
    /// The configuration must have passed validation: a zero hourly
    /// divisor would make the hourly value undefined.
    pub fn derive(effective_salary: Decimal, config: &LegalConfig) -> Self {
        let thirty = Decimal::from(30);
        let daily_value = effective_salary / thirty;
        Self {
            daily_value,
            subsidy_daily_value: config.transport_subsidy / thirty,
            health_daily_value: effective_salary * (config.health_pct / Decimal::ONE_HUNDRED)
                / thirty,
            pension_daily_value: effective_salary * (config.pension_pct / Decimal::ONE_HUNDRED)
                / thirty,
            hourly_value: effective_salary / Decimal::from(config.hourly_divisor),
        }
    }

    /// Returns the unit value for a surcharge kind.
    ///
    /// Hour-based kinds price from the hourly value; the two Sunday rest
    /// kinds price from the daily value.
    pub fn surcharge_unit(&self, kind: SurchargeKind, factors: &SurchargeFactors) -> Decimal {
        let base = if kind.is_day_based() {
            self.daily_value
        } else {
            self.hourly_value
        };
        base * factors.factor(kind)
    }
}
