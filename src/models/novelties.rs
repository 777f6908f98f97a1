//! Period novelty models.
//!
//! Novelties are the per-employee, per-period inputs to a settlement:
//! days worked, overtime and surcharge quantities, bonus, and loan
//! deduction. [`NoveltyPatch`] is the all-optional mirror used to override
//! a shared default record per employee during bulk settlement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SurchargeKind;

/// Per-employee, per-period settlement inputs.
///
/// All quantity fields default to zero when absent; `days_worked` defaults
/// per pay type (7 weekly, 30 monthly) when the engine resolves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodNovelties {
    /// Days worked in the period (0–30). When absent, the engine applies
    /// the pay-type default.
    #[serde(default)]
    pub days_worked: Option<Decimal>,
    /// Hours of daytime overtime.
    #[serde(default)]
    pub day_overtime_hours: Decimal,
    /// Hours of nighttime overtime.
    #[serde(default)]
    pub night_overtime_hours: Decimal,
    /// Hours worked at night within the ordinary schedule.
    #[serde(default)]
    pub night_surcharge_hours: Decimal,
    /// Hours of daytime overtime on Sundays or holidays.
    #[serde(default)]
    pub holiday_day_overtime_hours: Decimal,
    /// Hours of nighttime overtime on Sundays or holidays.
    #[serde(default)]
    pub holiday_night_overtime_hours: Decimal,
    /// Sunday rest days paid but not worked.
    #[serde(default)]
    pub unworked_sunday_count: Decimal,
    /// Sunday rest days worked and compensated.
    #[serde(default)]
    pub compensated_sunday_count: Decimal,
    /// Non-salary bonus for the period. When absent, the employee's
    /// habitual bonus applies; excluded from the health/pension base.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Loan installment withheld this period. Subtracted from the bonus,
    /// never from the salary base.
    #[serde(default)]
    pub loan_deduction: Decimal,
}

impl PeriodNovelties {
    /// Returns the quantity reported for a surcharge kind.
    pub fn quantity(&self, kind: SurchargeKind) -> Decimal {
        match kind {
            SurchargeKind::DayOvertime => self.day_overtime_hours,
            SurchargeKind::NightOvertime => self.night_overtime_hours,
            SurchargeKind::NightSurcharge => self.night_surcharge_hours,
            SurchargeKind::HolidayDayOvertime => self.holiday_day_overtime_hours,
            SurchargeKind::HolidayNightOvertime => self.holiday_night_overtime_hours,
            SurchargeKind::RestUnworkedSunday => self.unworked_sunday_count,
            SurchargeKind::RestCompensatedSunday => self.compensated_sunday_count,
        }
    }

    /// Merges a per-employee patch over this record. A field present in the
    /// patch wins; absent fields keep the default value.
    pub fn apply(&self, patch: &NoveltyPatch) -> PeriodNovelties {
        PeriodNovelties {
            days_worked: patch.days_worked.or(self.days_worked),
            day_overtime_hours: patch.day_overtime_hours.unwrap_or(self.day_overtime_hours),
            night_overtime_hours: patch
                .night_overtime_hours
                .unwrap_or(self.night_overtime_hours),
            night_surcharge_hours: patch
                .night_surcharge_hours
                .unwrap_or(self.night_surcharge_hours),
            holiday_day_overtime_hours: patch
                .holiday_day_overtime_hours
                .unwrap_or(self.holiday_day_overtime_hours),
            holiday_night_overtime_hours: patch
                .holiday_night_overtime_hours
                .unwrap_or(self.holiday_night_overtime_hours),
            unworked_sunday_count: patch
                .unworked_sunday_count
                .unwrap_or(self.unworked_sunday_count),
            compensated_sunday_count: patch
                .compensated_sunday_count
                .unwrap_or(self.compensated_sunday_count),
            bonus: patch.bonus.or(self.bonus),
            loan_deduction: patch.loan_deduction.unwrap_or(self.loan_deduction),
        }
    }
}

/// Per-employee override of the shared default novelties.
///
/// Every field is optional; only the fields present override the default
/// record during [`PeriodNovelties::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoveltyPatch {
    /// Overrides the default days worked.
    #[serde(default)]
    pub days_worked: Option<Decimal>,
    /// Overrides daytime overtime hours.
    #[serde(default)]
    pub day_overtime_hours: Option<Decimal>,
    /// Overrides nighttime overtime hours.
    #[serde(default)]
    pub night_overtime_hours: Option<Decimal>,
    /// Overrides ordinary night hours.
    #[serde(default)]
    pub night_surcharge_hours: Option<Decimal>,
    /// Overrides holiday daytime overtime hours.
    #[serde(default)]
    pub holiday_day_overtime_hours: Option<Decimal>,
    /// Overrides holiday nighttime overtime hours.
    #[serde(default)]
    pub holiday_night_overtime_hours: Option<Decimal>,
    /// Overrides the unworked Sunday count.
    #[serde(default)]
    pub unworked_sunday_count: Option<Decimal>,
    /// Overrides the compensated Sunday count.
    #[serde(default)]
    pub compensated_sunday_count: Option<Decimal>,
    /// Overrides the period bonus.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Overrides the loan installment.
    #[serde(default)]
    pub loan_deduction: Option<Decimal>,
}
