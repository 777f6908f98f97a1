//! Batch aggregation over the roster.
//!
//! Bulk settlement runs the engine for every active employee in one pass,
//! merging shared default novelties with per-employee overrides. A single
//! employee's failure never aborts the run: it is captured as a
//! [`BatchError`] entry and the batch still succeeds for everyone else.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::calculation::{compute_monthly_settlement, compute_settlement};
use crate::config::LegalConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{BatchError, Employee, NoveltyPatch, PayType, PayrollBatch, PeriodNovelties};

/// Returns the batch for a period, creating a fresh draft shell when none
/// exists yet.
pub fn create_or_load<'a>(
    batches: &'a mut HashMap<String, PayrollBatch>,
    period_id: &str,
    pay_type: PayType,
    now: DateTime<Utc>,
) -> &'a mut PayrollBatch {
    batches
        .entry(period_id.to_string())
        .or_insert_with(|| PayrollBatch::new(period_id, pay_type, now))
}

/// Settles every active employee into the batch.
///
/// For each active employee, the shared `defaults` are merged with that
/// employee's [`NoveltyPatch`] (patch fields win), and the engine runs
/// under the batch's pay type. Settlements are upserted by employee id;
/// per-employee calculation failures are collected and recorded on the
/// batch instead of aborting the run.
///
/// # Returns
///
/// The error list for this run (also stored in `batch.errors`), or
/// [`EngineError::BatchClosed`] when the batch is already approved.
pub fn bulk_settle(
    batch: &mut PayrollBatch,
    employees: &[Employee],
    defaults: &PeriodNovelties,
    overrides: &HashMap<String, NoveltyPatch>,
    config: &LegalConfig,
    now: DateTime<Utc>,
) -> EngineResult<Vec<BatchError>> {
    if batch.is_approved() {
        return Err(EngineError::BatchClosed {
            period_id: batch.period_id.clone(),
        });
    }

    let mut errors = Vec::new();

    for employee in employees.iter().filter(|e| e.active) {
        let novelties = match overrides.get(&employee.id) {
            Some(patch) => defaults.apply(patch),
            None => defaults.clone(),
        };

        let result = match batch.pay_type {
            PayType::Weekly => compute_settlement(employee, &novelties, config),
            PayType::Monthly => compute_monthly_settlement(employee, &novelties, config),
        };

        match result {
            Ok(settlement) => batch.upsert_settlement(settlement, now)?,
            Err(err) => errors.push(BatchError {
                employee_id: employee.id.clone(),
                name: employee.full_name.clone(),
                message: err.to_string(),
            }),
        }
    }

    batch.errors = errors.clone();
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-08-04T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn employee(id: &str, base_salary: &str) -> Employee {
        Employee {
            id: id.to_string(),
            full_name: format!("Employee {}", id),
            bank_account: "1234567890".to_string(),
            account_type: AccountType::Savings,
            base_salary: dec(base_salary),
            uses_statutory_minimum: false,
            active: true,
            habitual_bonus: None,
        }
    }

    fn config() -> LegalConfig {
        LegalConfig {
            minimum_wage: dec("1000000"),
            transport_subsidy: dec("117172"),
            hourly_divisor: 240,
            ..LegalConfig::default()
        }
    }

    #[test]
    fn test_create_or_load_creates_once() {
        let mut batches = HashMap::new();
        {
            let batch = create_or_load(&mut batches, "2025-S31", PayType::Weekly, now());
            batch.period_start = Some(chrono::NaiveDate::from_ymd_opt(2025, 7, 28).unwrap());
        }
        let batch = create_or_load(&mut batches, "2025-S31", PayType::Weekly, now());
        assert!(batch.period_start.is_some());
        assert_eq!(batches.len(), 1);
    }

    #[test]
    fn test_bulk_settles_all_active_employees() {
        let employees = vec![
            employee("emp_001", "1000000"),
            employee("emp_002", "1500000"),
            employee("emp_003", "2000000"),
        ];
        let mut batch = PayrollBatch::new("2025-S31", PayType::Weekly, now());

        let errors = bulk_settle(
            &mut batch,
            &employees,
            &PeriodNovelties::default(),
            &HashMap::new(),
            &config(),
            now(),
        )
        .unwrap();

        assert!(errors.is_empty());
        assert_eq!(batch.settlements.len(), 3);
        assert_eq!(
            batch.totals.total_payroll,
            batch.settlements.iter().map(|s| s.total_pay).sum()
        );
    }

    #[test]
    fn test_bulk_skips_inactive_employees() {
        let mut inactive = employee("emp_002", "1500000");
        inactive.active = false;
        let employees = vec![employee("emp_001", "1000000"), inactive];
        let mut batch = PayrollBatch::new("2025-S31", PayType::Weekly, now());

        bulk_settle(
            &mut batch,
            &employees,
            &PeriodNovelties::default(),
            &HashMap::new(),
            &config(),
            now(),
        )
        .unwrap();

        assert_eq!(batch.settlements.len(), 1);
        assert_eq!(batch.settlements[0].employee_id, "emp_001");
    }

    #[test]
    fn test_one_malformed_employee_yields_partial_batch() {
        let employees = vec![
            employee("emp_001", "1000000"),
            employee("emp_002", "-500"),
            employee("emp_003", "2000000"),
        ];
        let mut batch = PayrollBatch::new("2025-S31", PayType::Weekly, now());

        let errors = bulk_settle(
            &mut batch,
            &employees,
            &PeriodNovelties::default(),
            &HashMap::new(),
            &config(),
            now(),
        )
        .unwrap();

        assert_eq!(batch.settlements.len(), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].employee_id, "emp_002");
        assert!(errors[0].message.contains("base_salary"));
        assert_eq!(batch.errors, errors);
    }

    #[test]
    fn test_override_wins_per_field() {
        let employees = vec![employee("emp_001", "1000000"), employee("emp_002", "1000000")];
        let defaults = PeriodNovelties {
            days_worked: Some(dec("7")),
            day_overtime_hours: dec("2"),
            ..PeriodNovelties::default()
        };
        let mut overrides = HashMap::new();
        overrides.insert(
            "emp_002".to_string(),
            NoveltyPatch {
                days_worked: Some(dec("5")),
                ..NoveltyPatch::default()
            },
        );
        let mut batch = PayrollBatch::new("2025-S31", PayType::Weekly, now());

        bulk_settle(
            &mut batch,
            &employees,
            &defaults,
            &overrides,
            &config(),
            now(),
        )
        .unwrap();

        let by_id = |id: &str| {
            batch
                .settlements
                .iter()
                .find(|s| s.employee_id == id)
                .unwrap()
        };
        assert_eq!(by_id("emp_001").days_worked, dec("7"));
        assert_eq!(by_id("emp_002").days_worked, dec("5"));
        // The un-overridden overtime default still applies to both.
        assert_eq!(by_id("emp_002").surcharges[0].quantity, dec("2"));
    }

    #[test]
    fn test_monthly_batch_uses_monthly_engine() {
        let employees = vec![employee("emp_001", "1000000")];
        let mut batch = PayrollBatch::new("2025-M08", PayType::Monthly, now());

        bulk_settle(
            &mut batch,
            &employees,
            &PeriodNovelties::default(),
            &HashMap::new(),
            &config(),
            now(),
        )
        .unwrap();

        assert_eq!(batch.settlements[0].days_worked, dec("30"));
        assert_eq!(batch.settlements[0].pay_type, PayType::Monthly);
    }

    #[test]
    fn test_bulk_rejected_on_approved_batch() {
        let mut batch = PayrollBatch::new("2025-S31", PayType::Weekly, now());
        batch.approve(now()).unwrap();

        let result = bulk_settle(
            &mut batch,
            &[employee("emp_001", "1000000")],
            &PeriodNovelties::default(),
            &HashMap::new(),
            &config(),
            now(),
        );
        assert!(matches!(result, Err(EngineError::BatchClosed { .. })));
    }

    #[test]
    fn test_rerunning_bulk_is_idempotent() {
        let employees = vec![employee("emp_001", "1000000"), employee("emp_002", "1500000")];
        let mut batch = PayrollBatch::new("2025-S31", PayType::Weekly, now());
        let novelties = PeriodNovelties::default();

        bulk_settle(&mut batch, &employees, &novelties, &HashMap::new(), &config(), now())
            .unwrap();
        let totals_after_first = batch.totals.clone();

        bulk_settle(&mut batch, &employees, &novelties, &HashMap::new(), &config(), now())
            .unwrap();

        assert_eq!(batch.settlements.len(), 2);
        assert_eq!(batch.totals, totals_after_first);
    }
}
