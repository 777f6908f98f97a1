//! Property tests for the settlement engine.
//!
//! These exercise the arithmetic invariants the engine guarantees for
//! every valid input, not just the hand-picked scenarios.

use proptest::prelude::*;
use rust_decimal::Decimal;

use nomina_engine::calculation::{compute_monthly_settlement, compute_settlement};
use nomina_engine::config::LegalConfig;
use nomina_engine::models::{AccountType, Employee, PeriodNovelties};

fn employee(base_salary_cents: i64, uses_statutory_minimum: bool) -> Employee {
    Employee {
        id: "emp_001".to_string(),
        full_name: "Maria Gomez".to_string(),
        bank_account: "1234567890".to_string(),
        account_type: AccountType::Savings,
        base_salary: Decimal::new(base_salary_cents, 2),
        uses_statutory_minimum,
        active: true,
        habitual_bonus: None,
    }
}

fn config() -> LegalConfig {
    LegalConfig {
        minimum_wage: Decimal::from(1_423_500),
        transport_subsidy: Decimal::from(200_000),
        hourly_divisor: 230,
        ..LegalConfig::default()
    }
}

prop_compose! {
    fn arb_novelties()(
        days in 0u32..=30,
        day_ot in 0u32..=4000,
        night_ot in 0u32..=4000,
        night in 0u32..=4000,
        holiday_day_ot in 0u32..=4000,
        holiday_night_ot in 0u32..=4000,
        unworked in 0u32..=5,
        compensated in 0u32..=5,
        bonus_cents in 0i64..=100_000_000,
        loan_cents in 0i64..=100_000_000,
    ) -> PeriodNovelties {
        PeriodNovelties {
            days_worked: Some(Decimal::from(days)),
            day_overtime_hours: Decimal::new(i64::from(day_ot), 2),
            night_overtime_hours: Decimal::new(i64::from(night_ot), 2),
            night_surcharge_hours: Decimal::new(i64::from(night), 2),
            holiday_day_overtime_hours: Decimal::new(i64::from(holiday_day_ot), 2),
            holiday_night_overtime_hours: Decimal::new(i64::from(holiday_night_ot), 2),
            unworked_sunday_count: Decimal::from(unworked),
            compensated_sunday_count: Decimal::from(compensated),
            bonus: Some(Decimal::new(bonus_cents, 2)),
            loan_deduction: Decimal::new(loan_cents, 2),
        }
    }
}

proptest! {
    /// total_pay == net_payroll_value + net_bonus_value and
    /// total_bank_transfer == net_payroll_value, exactly, for all valid
    /// inputs.
    #[test]
    fn totals_identities_hold(
        salary_cents in 100_000_00i64..=20_000_000_00,
        statutory in any::<bool>(),
        novelties in arb_novelties(),
    ) {
        let settlement = compute_settlement(
            &employee(salary_cents, statutory),
            &novelties,
            &config(),
        ).unwrap();

        prop_assert_eq!(
            settlement.total_pay,
            settlement.net_payroll_value + settlement.net_bonus_value
        );
        prop_assert_eq!(settlement.total_bank_transfer, settlement.net_payroll_value);
        prop_assert_eq!(
            settlement.total_salary_portion,
            settlement.earned_salary + settlement.total_surcharges
        );
        prop_assert_eq!(
            settlement.total_deductions,
            settlement.health_deduction
                + settlement.pension_deduction
                + settlement.loan_deduction
        );
    }

    /// Every reported currency field carries at most 2 decimal places.
    #[test]
    fn money_fields_are_rounded_to_cents(
        salary_cents in 100_000_00i64..=20_000_000_00,
        novelties in arb_novelties(),
    ) {
        let settlement = compute_settlement(
            &employee(salary_cents, false),
            &novelties,
            &config(),
        ).unwrap();

        for (name, value) in [
            ("earned_salary", settlement.earned_salary),
            ("earned_subsidy", settlement.earned_subsidy),
            ("total_surcharges", settlement.total_surcharges),
            ("health_deduction", settlement.health_deduction),
            ("pension_deduction", settlement.pension_deduction),
            ("net_payroll_value", settlement.net_payroll_value),
            ("total_pay", settlement.total_pay),
        ] {
            prop_assert!(value.scale() <= 2, "{} has scale {}", name, value.scale());
        }
        for line in &settlement.surcharges {
            prop_assert!(line.amount.scale() <= 2);
            prop_assert!(line.unit_value.scale() <= 2);
        }
    }

    /// Zero days worked zeroes every day-scaled value.
    #[test]
    fn zero_days_zeroes_day_scaled_values(
        salary_cents in 100_000_00i64..=20_000_000_00,
    ) {
        let novelties = PeriodNovelties {
            days_worked: Some(Decimal::ZERO),
            ..PeriodNovelties::default()
        };
        let settlement = compute_settlement(
            &employee(salary_cents, false),
            &novelties,
            &config(),
        ).unwrap();

        prop_assert_eq!(settlement.earned_salary, Decimal::ZERO);
        prop_assert_eq!(settlement.earned_subsidy, Decimal::ZERO);
        prop_assert_eq!(settlement.health_deduction, Decimal::ZERO);
        prop_assert_eq!(settlement.pension_deduction, Decimal::ZERO);
    }

    /// The engine is a pure function: identical inputs, identical output.
    #[test]
    fn engine_is_idempotent(
        salary_cents in 100_000_00i64..=20_000_000_00,
        statutory in any::<bool>(),
        novelties in arb_novelties(),
    ) {
        let employee = employee(salary_cents, statutory);
        let config = config();
        let first = compute_settlement(&employee, &novelties, &config).unwrap();
        let second = compute_settlement(&employee, &novelties, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Weekly and monthly variants agree whenever days are explicit.
    #[test]
    fn pay_type_only_changes_defaults_and_tag(
        salary_cents in 100_000_00i64..=20_000_000_00,
        novelties in arb_novelties(),
    ) {
        let employee = employee(salary_cents, false);
        let config = config();
        let weekly = compute_settlement(&employee, &novelties, &config).unwrap();
        let monthly = compute_monthly_settlement(&employee, &novelties, &config).unwrap();

        prop_assert_eq!(weekly.total_pay, monthly.total_pay);
        prop_assert_eq!(weekly.earned_salary, monthly.earned_salary);
        prop_assert_eq!(weekly.total_surcharges, monthly.total_surcharges);
        prop_assert_ne!(weekly.pay_type, monthly.pay_type);
    }

    /// Subsidy eligibility depends only on the stored base salary.
    #[test]
    fn subsidy_depends_only_on_stored_salary(
        salary_cents in 100_000_00i64..=20_000_000_00,
        statutory in any::<bool>(),
        days in 1u32..=30,
    ) {
        let employee = employee(salary_cents, statutory);
        let config = config();
        let novelties = PeriodNovelties {
            days_worked: Some(Decimal::from(days)),
            ..PeriodNovelties::default()
        };
        let settlement = compute_settlement(&employee, &novelties, &config).unwrap();

        let eligible =
            employee.base_salary <= config.minimum_wage * Decimal::from(2);
        prop_assert_eq!(settlement.earned_subsidy > Decimal::ZERO, eligible);
    }
}
