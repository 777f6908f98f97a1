//! Employee model and related types.
//!
//! This module defines the Employee struct and AccountType enum
//! for representing roster entries in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The type of account an employee's pay is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// A bank savings account.
    Savings,
    /// A mobile wallet account (e.g., Nequi, Daviplata).
    MobileWallet,
    /// Paid in cash, no transfer.
    Cash,
}

/// Represents an employee on the payroll roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee. Immutable once created.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The account number pay is transferred to.
    pub bank_account: String,
    /// The type of the destination account.
    pub account_type: AccountType,
    /// The employee's monthly base salary.
    pub base_salary: Decimal,
    /// When true, rate computations substitute the statutory minimum wage
    /// for `base_salary`. Transport-subsidy eligibility still uses the
    /// stored `base_salary`. Intentional asymmetry, do not "fix".
    #[serde(default)]
    pub uses_statutory_minimum: bool,
    /// Soft-delete flag. Inactive employees are skipped by bulk settlement.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Default bonus amount used when a period supplies none.
    #[serde(default)]
    pub habitual_bonus: Option<Decimal>,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Returns the salary used for all rate computations.
    ///
    /// This is the statutory minimum wage when `uses_statutory_minimum` is
    /// set, otherwise the stored base salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomina_engine::models::{AccountType, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     full_name: "Maria Gomez".to_string(),
    ///     bank_account: "1234567890".to_string(),
    ///     account_type: AccountType::Savings,
    ///     base_salary: Decimal::from(3_000_000),
    ///     uses_statutory_minimum: true,
    ///     active: true,
    ///     habitual_bonus: None,
    /// };
    /// let minimum_wage = Decimal::from(1_423_500);
    /// assert_eq!(employee.effective_salary(minimum_wage), minimum_wage);
    /// ```
    pub fn effective_salary(&self, minimum_wage: Decimal) -> Decimal {
        if self.uses_statutory_minimum {
            minimum_wage
        } else {
            self.base_salary
        }
    }

    /// Returns true if the employee is eligible for the transport subsidy.
    ///
    /// Eligibility is `base_salary <= 2 x minimum_wage` on the *stored*
    /// base salary, regardless of `uses_statutory_minimum`. An employee
    /// earning above the threshold gets no subsidy even when rate math
    /// runs on the substituted minimum wage.
    pub fn subsidy_eligible(&self, minimum_wage: Decimal) -> bool {
        self.base_salary <= minimum_wage * Decimal::from(2)
    }
}
