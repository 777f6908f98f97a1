//! Settlement computation.
//!
//! The pure function at the center of the engine: given an employee, the
//! period novelties, and the legal configuration, produce the itemized
//! [`Settlement`]. No clocks, no globals; identical inputs always yield
//! an identical settlement.

use rust_decimal::Decimal;

use crate::config::LegalConfig;
use crate::error::EngineResult;
use crate::models::{
    Employee, PayType, PeriodNovelties, Settlement, SettlementWarning, SurchargeKind,
    SurchargeLine,
};

use super::money::round_money;
use super::rates::UnitValues;
use super::validate::validate_inputs;

/// Computes a weekly settlement.
///
/// When the novelties omit `days_worked`, it defaults to 7.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::Validation`] with the complete
/// list of violations when any input is out of range.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_settlement;
/// use nomina_engine::config::LegalConfig;
/// use nomina_engine::models::{AccountType, Employee, PeriodNovelties};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     full_name: "Maria Gomez".to_string(),
///     bank_account: "1234567890".to_string(),
///     account_type: AccountType::Savings,
///     base_salary: Decimal::from(1_423_500),
///     uses_statutory_minimum: false,
///     active: true,
///     habitual_bonus: None,
/// };
///
/// let settlement =
///     compute_settlement(&employee, &PeriodNovelties::default(), &LegalConfig::default())
///         .unwrap();
/// assert_eq!(settlement.days_worked, Decimal::from(7));
/// assert_eq!(settlement.total_bank_transfer, settlement.net_payroll_value);
/// ```
pub fn compute_settlement(
    employee: &Employee,
    novelties: &PeriodNovelties,
    config: &LegalConfig,
) -> EngineResult<Settlement> {
    compute(employee, novelties, config, PayType::Weekly)
}

/// Computes a monthly settlement.
///
/// Identical to [`compute_settlement`] except that an omitted
/// `days_worked` defaults to 30 and the result is tagged monthly.
pub fn compute_monthly_settlement(
    employee: &Employee,
    novelties: &PeriodNovelties,
    config: &LegalConfig,
) -> EngineResult<Settlement> {
    compute(employee, novelties, config, PayType::Monthly)
}

fn compute(
    employee: &Employee,
    novelties: &PeriodNovelties,
    config: &LegalConfig,
    pay_type: PayType,
) -> EngineResult<Settlement> {
    let days_worked = novelties
        .days_worked
        .unwrap_or_else(|| pay_type.default_days_worked());

    validate_inputs(employee, novelties, days_worked, config)?;

    // Rates run on the effective salary; subsidy eligibility stays on the
    // stored base salary.
    let effective_salary = employee.effective_salary(config.minimum_wage);
    let units = UnitValues::derive(effective_salary, config);

    let earned_salary = round_money(units.daily_value * days_worked);

    let earned_subsidy = if employee.subsidy_eligible(config.minimum_wage) {
        round_money(units.subsidy_daily_value * days_worked)
    } else {
        Decimal::ZERO
    };

    let mut surcharges = Vec::with_capacity(SurchargeKind::ALL.len());
    let mut total_surcharges = Decimal::ZERO;
    for kind in SurchargeKind::ALL {
        let quantity = novelties.quantity(kind);
        let unit_value = units.surcharge_unit(kind, &config.factors);
        let amount = round_money(quantity * unit_value);
        total_surcharges += amount;
        surcharges.push(SurchargeLine {
            kind,
            quantity,
            unit_value: round_money(unit_value),
            amount,
        });
    }

    let total_salary_portion = earned_salary + total_surcharges;

    let health_deduction = round_money(units.health_daily_value * days_worked);
    let pension_deduction = round_money(units.pension_daily_value * days_worked);
    let loan_deduction = round_money(novelties.loan_deduction);
    let total_deductions = health_deduction + pension_deduction + loan_deduction;

    let bonus = round_money(
        novelties
            .bonus
            .or(employee.habitual_bonus)
            .unwrap_or(Decimal::ZERO),
    );

    let net_payroll_value =
        total_salary_portion + earned_subsidy - health_deduction - pension_deduction;
    // May go negative when the loan exceeds the bonus; not clamped.
    let net_bonus_value = bonus - loan_deduction;
    let total_pay = net_payroll_value + net_bonus_value;

    let mut warnings = Vec::new();
    if total_pay < Decimal::ZERO {
        warnings.push(SettlementWarning {
            code: "negative_total_pay".to_string(),
            message: format!(
                "total pay is negative ({}); deductions exceed earnings",
                total_pay
            ),
        });
    }

    Ok(Settlement {
        employee_id: employee.id.clone(),
        full_name: employee.full_name.clone(),
        bank_account: employee.bank_account.clone(),
        account_type: employee.account_type,
        pay_type,
        days_worked,
        surcharges,
        earned_salary,
        earned_subsidy,
        total_surcharges,
        total_salary_portion,
        bonus,
        health_deduction,
        pension_deduction,
        loan_deduction,
        total_deductions,
        net_payroll_value,
        net_bonus_value,
        total_pay,
        total_bank_transfer: net_payroll_value,
        warnings,
    })
}
