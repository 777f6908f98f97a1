//! Legal configuration types.
//!
//! This module contains the strongly-typed statutory parameters that
//! drive every settlement calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SurchargeKind;

/// Multiplicative factors for the seven surcharge kinds.
///
/// A typed struct rather than a map, so all seven kinds are present by
/// construction; validation still checks that each factor is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeFactors {
    /// Daytime overtime factor (e.g., 1.25).
    pub day_overtime: Decimal,
    /// Nighttime overtime factor (e.g., 1.75).
    pub night_overtime: Decimal,
    /// Ordinary night-hours factor (e.g., 0.35).
    pub night_surcharge: Decimal,
    /// Sunday/holiday daytime overtime factor (e.g., 2.0).
    pub holiday_day_overtime: Decimal,
    /// Sunday/holiday nighttime overtime factor (e.g., 2.5).
    pub holiday_night_overtime: Decimal,
    /// Factor for a paid, unworked Sunday rest day (e.g., 1.0).
    pub rest_unworked_sunday: Decimal,
    /// Factor for a worked, compensated Sunday rest day (e.g., 1.75).
    pub rest_compensated_sunday: Decimal,
}

impl SurchargeFactors {
    /// Returns the factor for a surcharge kind.
    pub fn factor(&self, kind: SurchargeKind) -> Decimal {
        match kind {
            SurchargeKind::DayOvertime => self.day_overtime,
            SurchargeKind::NightOvertime => self.night_overtime,
            SurchargeKind::NightSurcharge => self.night_surcharge,
            SurchargeKind::HolidayDayOvertime => self.holiday_day_overtime,
            SurchargeKind::HolidayNightOvertime => self.holiday_night_overtime,
            SurchargeKind::RestUnworkedSunday => self.rest_unworked_sunday,
            SurchargeKind::RestCompensatedSunday => self.rest_compensated_sunday,
        }
    }
}

impl Default for SurchargeFactors {
    fn default() -> Self {
        Self {
            day_overtime: Decimal::new(125, 2),
            night_overtime: Decimal::new(175, 2),
            night_surcharge: Decimal::new(35, 2),
            holiday_day_overtime: Decimal::from(2),
            holiday_night_overtime: Decimal::new(25, 1),
            rest_unworked_sunday: Decimal::ONE,
            rest_compensated_sunday: Decimal::new(175, 2),
        }
    }
}

/// One step of the historical hourly-divisor schedule.
///
/// The monthly hours divisor steps down over time as the statutory work
/// week shortens; each rule applies from its effective date onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisorRule {
    /// The date this divisor takes effect.
    pub effective_date: NaiveDate,
    /// Monthly hours divisor in force from that date.
    pub divisor: u32,
}

/// The statutory parameters for one configuration year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalConfig {
    /// Statutory monthly minimum wage (SMMLV).
    pub minimum_wage: Decimal,
    /// Monthly transport subsidy for eligible employees.
    pub transport_subsidy: Decimal,
    /// Health contribution percentage withheld from the employee (0–100).
    pub health_pct: Decimal,
    /// Pension contribution percentage withheld from the employee (0–100).
    pub pension_pct: Decimal,
    /// Monthly hours divisor in force for this configuration's year.
    pub hourly_divisor: u32,
    /// Surcharge factor table.
    pub factors: SurchargeFactors,
    /// The calendar year these parameters were decreed for.
    pub year: i32,
    /// Historical divisor schedule, sorted by effective date ascending.
    #[serde(default)]
    pub divisor_schedule: Vec<DivisorRule>,
}

impl LegalConfig {
    /// Returns the hourly divisor in force on a given date.
    ///
    /// Finds the most recent schedule rule effective on or before the
    /// date; dates preceding the whole schedule fall back to
    /// `hourly_divisor`.
    pub fn divisor_for_date(&self, date: NaiveDate) -> u32 {
        self.divisor_schedule
            .iter()
            .rfind(|rule| rule.effective_date <= date)
            .map(|rule| rule.divisor)
            .unwrap_or(self.hourly_divisor)
    }
}

impl Default for LegalConfig {
    /// The statutory values decreed for 2025.
    fn default() -> Self {
        Self {
            minimum_wage: Decimal::from(1_423_500),
            transport_subsidy: Decimal::from(200_000),
            health_pct: Decimal::from(4),
            pension_pct: Decimal::from(4),
            hourly_divisor: 230,
            factors: SurchargeFactors::default(),
            year: 2025,
            divisor_schedule: ley_2101_schedule(),
        }
    }
}

/// The Ley 2101 de 2021 step-down of the monthly hours divisor.
fn ley_2101_schedule() -> Vec<DivisorRule> {
    // Fixed statutory dates; construction cannot fail.
    let rule = |y, m, d, divisor| DivisorRule {
        effective_date: NaiveDate::from_ymd_opt(y, m, d).expect("statutory date"),
        divisor,
    };
    vec![
        rule(1991, 1, 1, 240),
        rule(2023, 7, 15, 235),
        rule(2024, 7, 15, 230),
        rule(2025, 7, 15, 220),
        rule(2026, 7, 15, 210),
    ]
}
