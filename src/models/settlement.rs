//! Settlement models.
//!
//! This module contains the [`Settlement`] type, the itemized pay
//! computation for one employee in one period, together with the
//! [`SurchargeKind`] taxonomy and the per-kind breakdown lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccountType, PayType};

/// The seven categories of premium pay recognized by Colombian payroll.
///
/// Five kinds are hour-based (priced from the hourly value); the two
/// Sunday rest kinds are day-based (priced from the daily value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeKind {
    /// Daytime overtime (hora extra diurna).
    DayOvertime,
    /// Nighttime overtime (hora extra nocturna).
    NightOvertime,
    /// Ordinary hours worked at night (recargo nocturno).
    NightSurcharge,
    /// Daytime overtime on a Sunday or holiday.
    HolidayDayOvertime,
    /// Nighttime overtime on a Sunday or holiday.
    HolidayNightOvertime,
    /// Sunday rest day paid but not worked.
    RestUnworkedSunday,
    /// Sunday rest day worked and compensated.
    RestCompensatedSunday,
}

impl SurchargeKind {
    /// All surcharge kinds in their canonical settlement order.
    pub const ALL: [SurchargeKind; 7] = [
        SurchargeKind::DayOvertime,
        SurchargeKind::NightOvertime,
        SurchargeKind::NightSurcharge,
        SurchargeKind::HolidayDayOvertime,
        SurchargeKind::HolidayNightOvertime,
        SurchargeKind::RestUnworkedSunday,
        SurchargeKind::RestCompensatedSunday,
    ];

    /// Returns true for the kinds priced from the daily value rather than
    /// the hourly value.
    pub fn is_day_based(self) -> bool {
        matches!(
            self,
            SurchargeKind::RestUnworkedSunday | SurchargeKind::RestCompensatedSunday
        )
    }

    /// The snake_case name of the kind, used for field-level violations.
    pub fn name(self) -> &'static str {
        match self {
            SurchargeKind::DayOvertime => "day_overtime",
            SurchargeKind::NightOvertime => "night_overtime",
            SurchargeKind::NightSurcharge => "night_surcharge",
            SurchargeKind::HolidayDayOvertime => "holiday_day_overtime",
            SurchargeKind::HolidayNightOvertime => "holiday_night_overtime",
            SurchargeKind::RestUnworkedSunday => "rest_unworked_sunday",
            SurchargeKind::RestCompensatedSunday => "rest_compensated_sunday",
        }
    }
}

/// One line of the per-kind surcharge breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeLine {
    /// The surcharge kind this line reports.
    pub kind: SurchargeKind,
    /// The quantity reported (hours, or days for the Sunday rest kinds).
    pub quantity: Decimal,
    /// The unit value applied (rounded for reporting).
    pub unit_value: Decimal,
    /// The line amount: quantity x unit value, accumulated in full
    /// precision and rounded at output.
    pub amount: Decimal,
}

/// A non-fatal warning attached to a settlement.
///
/// Warnings flag results that the caller may want to reject (e.g., a
/// negative total pay) but that never abort the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The itemized pay computation for one employee in one period.
///
/// All currency fields are rounded to 2 decimal places, half away from
/// zero. Aggregate fields sum the rounded components, so the identities
/// `total_pay == net_payroll_value + net_bonus_value` and
/// `total_bank_transfer == net_payroll_value` hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The employee this settlement is for.
    pub employee_id: String,
    /// The employee's full name, copied for reporting.
    pub full_name: String,
    /// The destination account, copied for reporting.
    pub bank_account: String,
    /// The destination account type, copied for reporting.
    pub account_type: AccountType,
    /// The pay type this settlement was computed under.
    pub pay_type: PayType,
    /// Days worked in the period after pay-type defaulting.
    pub days_worked: Decimal,
    /// Per-kind surcharge breakdown, in [`SurchargeKind::ALL`] order.
    pub surcharges: Vec<SurchargeLine>,
    /// Salary earned for the days worked.
    pub earned_salary: Decimal,
    /// Transport subsidy earned, zero when not eligible.
    pub earned_subsidy: Decimal,
    /// Sum of all surcharge line amounts.
    pub total_surcharges: Decimal,
    /// Earned salary plus surcharges: the salary portion of gross pay.
    pub total_salary_portion: Decimal,
    /// Non-salary bonus for the period.
    pub bonus: Decimal,
    /// Health contribution withheld.
    pub health_deduction: Decimal,
    /// Pension contribution withheld.
    pub pension_deduction: Decimal,
    /// Loan installment withheld from the bonus.
    pub loan_deduction: Decimal,
    /// Health + pension + loan.
    pub total_deductions: Decimal,
    /// Salary portion + subsidy - health - pension.
    pub net_payroll_value: Decimal,
    /// Bonus - loan. May be negative; never clamped.
    pub net_bonus_value: Decimal,
    /// Net payroll value + net bonus value.
    pub total_pay: Decimal,
    /// The amount transferred to the bank: the net payroll value only.
    pub total_bank_transfer: Decimal,
    /// Non-fatal warnings raised during computation.
    #[serde(default)]
    pub warnings: Vec<SettlementWarning>,
}

impl Settlement {
    /// Returns true if any warning with the given code is present.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
