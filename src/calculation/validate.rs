//! Input validation for settlement calculation.
//!
//! Validation collects every violation it finds, never failing fast, so a
//! caller fixing its input sees the complete list in one pass.

use rust_decimal::Decimal;

use crate::config::LegalConfig;
use crate::error::{EngineError, EngineResult, Violation};
use crate::models::{Employee, PeriodNovelties, SurchargeKind};

const MAX_DAYS_WORKED: u32 = 30;

/// Collects the violations in a legal configuration.
fn config_violations(config: &LegalConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if config.minimum_wage <= Decimal::ZERO {
        violations.push(Violation::new("minimum_wage", "must be positive"));
    }

    if config.transport_subsidy < Decimal::ZERO {
        violations.push(Violation::new("transport_subsidy", "must not be negative"));
    }

    for (field, pct) in [
        ("health_pct", config.health_pct),
        ("pension_pct", config.pension_pct),
    ] {
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            violations.push(Violation::new(field, "must be between 0 and 100"));
        }
    }

    if config.hourly_divisor == 0 {
        violations.push(Violation::new("hourly_divisor", "must be positive"));
    }

    for kind in SurchargeKind::ALL {
        if config.factors.factor(kind) <= Decimal::ZERO {
            violations.push(Violation::new(
                format!("factors.{}", kind.name()),
                "must be positive",
            ));
        }
    }

    violations
}

/// Validates a legal configuration on its own, e.g. before accepting a
/// configuration update.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] with every violation found.
pub fn validate_config(config: &LegalConfig) -> EngineResult<()> {
    let violations = config_violations(config);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::validation(violations))
    }
}

/// Validates the inputs to a settlement calculation.
///
/// `days_worked` is the resolved value: the novelty field after the
/// pay-type default has been applied.
///
/// # Returns
///
/// `Ok(())` when everything is in range, otherwise
/// [`EngineError::Validation`] carrying every violation found:
/// - `base_salary` must be positive
/// - `days_worked` must be in [0, 30]
/// - every surcharge quantity, the bonus, and the loan must be
///   non-negative
/// - the configuration must carry a positive minimum wage, a positive
///   hourly divisor, and a positive factor for all seven surcharge kinds
pub fn validate_inputs(
    employee: &Employee,
    novelties: &PeriodNovelties,
    days_worked: Decimal,
    config: &LegalConfig,
) -> EngineResult<()> {
    let mut violations = Vec::new();

    if employee.base_salary <= Decimal::ZERO {
        violations.push(Violation::new("base_salary", "must be positive"));
    }

    if days_worked < Decimal::ZERO || days_worked > Decimal::from(MAX_DAYS_WORKED) {
        violations.push(Violation::new("days_worked", "must be between 0 and 30"));
    }

    for kind in SurchargeKind::ALL {
        if novelties.quantity(kind) < Decimal::ZERO {
            violations.push(Violation::new(kind.name(), "must not be negative"));
        }
    }

    if let Some(bonus) = novelties.bonus {
        if bonus < Decimal::ZERO {
            violations.push(Violation::new("bonus", "must not be negative"));
        }
    }

    if novelties.loan_deduction < Decimal::ZERO {
        violations.push(Violation::new("loan_deduction", "must not be negative"));
    }

    violations.extend(config_violations(config));

    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::validation(violations))
    }
}
