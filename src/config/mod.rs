//! Legal configuration for payroll settlement.
//!
//! Statutory constants (minimum wage, transport subsidy, health/pension
//! percentages), the surcharge factor table, and the historical hourly
//! divisor schedule, loadable from YAML configuration files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DivisorRule, LegalConfig, SurchargeFactors};
