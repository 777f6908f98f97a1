//! Request types for the payroll settlement engine API.
//!
//! This module defines the JSON request structures for the employee CRUD
//! and settlement endpoints.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AccountType, NoveltyPatch, PayType, PeriodNovelties};
use crate::roster::{EmployeeUpdate, NewEmployee};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Explicit employee id; generated when absent.
    #[serde(default)]
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
    #[serde(default)]
    pub uses_statutory_minimum: bool,
    /// Default bonus amount used when a period supplies none.
    #[serde(default)]
    pub habitual_bonus: Option<Decimal>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(request: CreateEmployeeRequest) -> Self {
        NewEmployee {
            id: request.id,
            full_name: request.full_name,
            bank_account: request.bank_account,
            account_type: request.account_type,
            base_salary: request.base_salary,
            uses_statutory_minimum: request.uses_statutory_minimum,
            habitual_bonus: request.habitual_bonus,
        }
    }
}

/// Request body for `PUT /employees/{id}`. Only the fields present are
/// changed; the id is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// New full name, when present.
    #[serde(default)]
    pub full_name: Option<String>,
    /// New account number, when present.
    #[serde(default)]
    pub bank_account: Option<String>,
    /// New account type, when present.
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// New base salary, when present.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// New statutory-minimum flag, when present.
    #[serde(default)]
    pub uses_statutory_minimum: Option<bool>,
    /// New habitual bonus, when present.
    #[serde(default)]
    pub habitual_bonus: Option<Decimal>,
}

impl From<UpdateEmployeeRequest> for EmployeeUpdate {
    fn from(request: UpdateEmployeeRequest) -> Self {
        EmployeeUpdate {
            full_name: request.full_name,
            bank_account: request.bank_account,
            account_type: request.account_type,
            base_salary: request.base_salary,
            uses_statutory_minimum: request.uses_statutory_minimum,
            habitual_bonus: request.habitual_bonus.map(Some),
        }
    }
}

/// Request body for `POST /periods/{period_id}/settlements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The employee to settle.
    pub employee_id: String,
    /// Pay cadence used when the period's batch does not exist yet.
    #[serde(default)]
    pub pay_type: PayType,
    /// The period novelties for this employee.
    #[serde(default)]
    pub novelties: PeriodNovelties,
}

/// Request body for `POST /periods/{period_id}/bulk`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkSettleRequest {
    /// Pay cadence used when the period's batch does not exist yet.
    #[serde(default)]
    pub pay_type: PayType,
    /// Default novelties applied to every active employee.
    #[serde(default)]
    pub defaults: PeriodNovelties,
    /// Per-employee overrides; a present field wins over the default.
    #[serde(default)]
    pub overrides: HashMap<String, NoveltyPatch>,
    /// First day of the period, recorded on the batch when present.
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    /// Last day of the period, recorded on the batch when present.
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
}

/// Query parameters for `DELETE /employees/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteParams {
    /// When true, physically removes the record instead of deactivating.
    #[serde(default)]
    pub hard: bool,
}
