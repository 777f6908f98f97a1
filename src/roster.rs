//! In-memory employee roster with CRUD semantics.
//!
//! The roster owns the employee records between calculations: create,
//! read, update, soft delete (deactivate), and explicit hard delete.
//! Persisting the roster beyond process memory is the caller's concern.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult, Violation};
use crate::models::{AccountType, Employee};

/// The fields required to create a roster entry.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Explicit id, or `None` to generate one.
    pub id: Option<String>,
    /// The employee's full name.
    pub full_name: String,
    /// The account number pay is transferred to.
    pub bank_account: String,
    /// The type of the destination account.
    pub account_type: AccountType,
    /// The employee's monthly base salary.
    pub base_salary: Decimal,
    /// Whether rate computations substitute the statutory minimum wage.
    pub uses_statutory_minimum: bool,
    /// Default bonus amount used when a period supplies none.
    pub habitual_bonus: Option<Decimal>,
}

/// A partial update to a roster entry. The id is immutable and therefore
/// absent here.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    /// New full name, when present.
    pub full_name: Option<String>,
    /// New account number, when present.
    pub bank_account: Option<String>,
    /// New account type, when present.
    pub account_type: Option<AccountType>,
    /// New base salary, when present.
    pub base_salary: Option<Decimal>,
    /// New statutory-minimum flag, when present.
    pub uses_statutory_minimum: Option<bool>,
    /// New habitual bonus; `Some(None)` clears it.
    pub habitual_bonus: Option<Option<Decimal>>,
}

/// The in-memory employee roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the roster.
    ///
    /// Generates a UUID when no id is supplied. Fails with a validation
    /// error on a duplicate id or a non-positive base salary.
    pub fn create(&mut self, new: NewEmployee) -> EngineResult<&Employee> {
        let mut violations = Vec::new();

        if new.base_salary <= Decimal::ZERO {
            violations.push(Violation::new("base_salary", "must be positive"));
        }

        let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.employees.iter().any(|e| e.id == id) {
            violations.push(Violation::new("id", format!("already exists: {}", id)));
        }

        if !violations.is_empty() {
            return Err(EngineError::validation(violations));
        }

        let index = self.employees.len();
        self.employees.push(Employee {
            id,
            full_name: new.full_name,
            bank_account: new.bank_account,
            account_type: new.account_type,
            base_salary: new.base_salary,
            uses_statutory_minimum: new.uses_statutory_minimum,
            active: true,
            habitual_bonus: new.habitual_bonus,
        });
        Ok(&self.employees[index])
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: &str) -> EngineResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Returns every roster entry, active or not, in insertion order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns clones of the active employees, in insertion order.
    pub fn active(&self) -> Vec<Employee> {
        self.employees.iter().filter(|e| e.active).cloned().collect()
    }

    /// Applies a partial update to an employee. The id never changes.
    pub fn update(&mut self, id: &str, update: EmployeeUpdate) -> EngineResult<&Employee> {
        if let Some(salary) = update.base_salary {
            if salary <= Decimal::ZERO {
                return Err(EngineError::validation(vec![Violation::new(
                    "base_salary",
                    "must be positive",
                )]));
            }
        }

        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;

        if let Some(full_name) = update.full_name {
            employee.full_name = full_name;
        }
        if let Some(bank_account) = update.bank_account {
            employee.bank_account = bank_account;
        }
        if let Some(account_type) = update.account_type {
            employee.account_type = account_type;
        }
        if let Some(base_salary) = update.base_salary {
            employee.base_salary = base_salary;
        }
        if let Some(flag) = update.uses_statutory_minimum {
            employee.uses_statutory_minimum = flag;
        }
        if let Some(habitual_bonus) = update.habitual_bonus {
            employee.habitual_bonus = habitual_bonus;
        }

        Ok(employee)
    }

    /// Soft-deletes an employee: the record stays, flagged inactive.
    pub fn deactivate(&mut self, id: &str) -> EngineResult<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        employee.active = false;
        Ok(())
    }

    /// Physically removes an employee. Only for explicit hard deletes.
    pub fn remove(&mut self, id: &str) -> EngineResult<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        Ok(self.employees.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn new_employee(id: Option<&str>) -> NewEmployee {
        NewEmployee {
            id: id.map(String::from),
            full_name: "Maria Gomez".to_string(),
            bank_account: "1234567890".to_string(),
            account_type: AccountType::Savings,
            base_salary: dec("1423500"),
            uses_statutory_minimum: false,
            habitual_bonus: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();

        let employee = roster.get("emp_001").unwrap();
        assert_eq!(employee.full_name, "Maria Gomez");
        assert!(employee.active);
    }

    #[test]
    fn test_create_generates_id_when_absent() {
        let mut roster = Roster::new();
        let id = roster.create(new_employee(None)).unwrap().id.clone();
        assert!(!id.is_empty());
        assert!(roster.get(&id).is_ok());
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();

        let result = roster.create(new_employee(Some("emp_001")));
        match result {
            Err(EngineError::Validation { violations }) => {
                assert_eq!(violations[0].field, "id");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_non_positive_salary() {
        let mut roster = Roster::new();
        let mut new = new_employee(Some("emp_001"));
        new.base_salary = Decimal::ZERO;

        let result = roster.create(new);
        assert!(matches!(result, Err(EngineError::Validation { .. })));
        assert!(roster.get("emp_001").is_err());
    }

    #[test]
    fn test_get_unknown_id_not_found() {
        let roster = Roster::new();
        let result = roster.get("missing");
        match result {
            Err(EngineError::EmployeeNotFound { id }) => assert_eq!(id, "missing"),
            other => panic!("Expected EmployeeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();

        roster
            .update(
                "emp_001",
                EmployeeUpdate {
                    base_salary: Some(dec("2000000")),
                    habitual_bonus: Some(Some(dec("50000"))),
                    ..EmployeeUpdate::default()
                },
            )
            .unwrap();

        let employee = roster.get("emp_001").unwrap();
        assert_eq!(employee.base_salary, dec("2000000"));
        assert_eq!(employee.habitual_bonus, Some(dec("50000")));
        assert_eq!(employee.full_name, "Maria Gomez");
        assert_eq!(employee.id, "emp_001");
    }

    #[test]
    fn test_update_rejects_non_positive_salary() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();

        let result = roster.update(
            "emp_001",
            EmployeeUpdate {
                base_salary: Some(dec("-1")),
                ..EmployeeUpdate::default()
            },
        );
        assert!(matches!(result, Err(EngineError::Validation { .. })));
        assert_eq!(roster.get("emp_001").unwrap().base_salary, dec("1423500"));
    }

    #[test]
    fn test_deactivate_keeps_record() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();
        roster.deactivate("emp_001").unwrap();

        let employee = roster.get("emp_001").unwrap();
        assert!(!employee.active);
        assert_eq!(roster.all().len(), 1);
        assert!(roster.active().is_empty());
    }

    #[test]
    fn test_remove_is_physical() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();

        let removed = roster.remove("emp_001").unwrap();
        assert_eq!(removed.id, "emp_001");
        assert!(roster.get("emp_001").is_err());
        assert!(roster.all().is_empty());
    }

    #[test]
    fn test_active_filters_inactive() {
        let mut roster = Roster::new();
        roster.create(new_employee(Some("emp_001"))).unwrap();
        roster.create(new_employee(Some("emp_002"))).unwrap();
        roster.deactivate("emp_001").unwrap();

        let active = roster.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "emp_002");
    }
}
