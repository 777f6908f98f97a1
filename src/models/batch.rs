//! Payroll batch model and its approval state machine.
//!
//! A batch groups the settlements of one pay period under a period
//! identifier, keeps running totals, and enforces the one-way
//! draft → approved transition.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Settlement;

/// The pay cadence a batch (and its settlements) is computed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Weekly payroll; days worked defaults to 7.
    #[default]
    Weekly,
    /// Monthly payroll; days worked defaults to 30.
    Monthly,
}

impl PayType {
    /// The days-worked default applied when novelties omit the field.
    pub fn default_days_worked(self) -> Decimal {
        match self {
            PayType::Weekly => Decimal::from(7),
            PayType::Monthly => Decimal::from(30),
        }
    }
}

/// The lifecycle state of a payroll batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Open for settlement upserts.
    Draft,
    /// Closed. Terminal; no further mutation permitted.
    Approved,
}

/// Aggregate totals over a batch's settlements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTotals {
    /// Sum of every settlement's total pay.
    pub total_payroll: Decimal,
    /// Sum of every settlement's bank transfer amount.
    pub total_bank_transfer: Decimal,
}

/// A per-employee failure captured during a bulk settlement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    /// The employee whose calculation failed.
    pub employee_id: String,
    /// The employee's full name, for reporting.
    pub name: String,
    /// The calculation error message.
    pub message: String,
}

/// The collection of settlements for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBatch {
    /// The period identifier this batch is keyed by (e.g., "2025-S31").
    pub period_id: String,
    /// The pay cadence for every settlement in the batch.
    pub pay_type: PayType,
    /// The lifecycle state.
    pub status: BatchStatus,
    /// First day of the period, when known.
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    /// Last day of the period, when known.
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    /// Settlements in insertion order, unique per employee id.
    pub settlements: Vec<Settlement>,
    /// Totals recomputed from scratch on every mutation.
    pub totals: BatchTotals,
    /// Per-employee failures from the most recent bulk run.
    #[serde(default)]
    pub errors: Vec<BatchError>,
    /// When the batch shell was created.
    pub created_at: DateTime<Utc>,
    /// When a settlement was last written.
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
    /// When the batch was approved. Stamped exactly once.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

impl PayrollBatch {
    /// Creates a fresh draft batch shell with no settlements and zero
    /// totals.
    pub fn new(period_id: impl Into<String>, pay_type: PayType, now: DateTime<Utc>) -> Self {
        Self {
            period_id: period_id.into(),
            pay_type,
            status: BatchStatus::Draft,
            period_start: None,
            period_end: None,
            settlements: Vec::new(),
            totals: BatchTotals::default(),
            errors: Vec::new(),
            created_at: now,
            processed_at: None,
            approved_at: None,
        }
    }

    /// Returns true once the batch has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == BatchStatus::Approved
    }

    /// Writes a settlement into the batch, replacing any existing
    /// settlement for the same employee.
    ///
    /// Totals are recomputed from scratch and `processed_at` is stamped.
    /// Fails with [`EngineError::BatchClosed`] once the batch is approved.
    pub fn upsert_settlement(
        &mut self,
        settlement: Settlement,
        now: DateTime<Utc>,
    ) -> EngineResult<()> {
        if self.is_approved() {
            return Err(EngineError::BatchClosed {
                period_id: self.period_id.clone(),
            });
        }

        match self
            .settlements
            .iter_mut()
            .find(|s| s.employee_id == settlement.employee_id)
        {
            Some(existing) => *existing = settlement,
            None => self.settlements.push(settlement),
        }

        self.recompute_totals();
        self.processed_at = Some(now);
        Ok(())
    }

    /// Approves the batch: draft → approved, stamping `approved_at`.
    ///
    /// The transition is terminal. Re-approving fails with
    /// [`EngineError::BatchClosed`] and never restamps `approved_at`.
    pub fn approve(&mut self, now: DateTime<Utc>) -> EngineResult<()> {
        if self.is_approved() {
            return Err(EngineError::BatchClosed {
                period_id: self.period_id.clone(),
            });
        }
        self.status = BatchStatus::Approved;
        self.approved_at = Some(now);
        Ok(())
    }

    fn recompute_totals(&mut self) {
        self.totals = BatchTotals {
            total_payroll: self.settlements.iter().map(|s| s.total_pay).sum(),
            total_bank_transfer: self
                .settlements
                .iter()
                .map(|s| s.total_bank_transfer)
                .sum(),
        };
    }
}
