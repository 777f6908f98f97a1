//! Domain models for the payroll settlement engine.

mod batch;
mod employee;
mod novelties;
mod settlement;

pub use batch::{BatchError, BatchStatus, BatchTotals, PayType, PayrollBatch};
pub use employee::{AccountType, Employee};
pub use novelties::{NoveltyPatch, PeriodNovelties};
pub use settlement::{Settlement, SettlementWarning, SurchargeKind, SurchargeLine};
