//! Error types for the payroll settlement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during settlement calculation
//! and batch aggregation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation violation.
///
/// Validation collects every violation it finds, so a failed calculation
/// reports the complete list rather than just the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The input field that failed validation (e.g., "days_worked").
    pub field: String,
    /// A description of what made the field invalid.
    pub message: String,
}

impl Violation {
    /// Creates a new violation for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// The main error type for the payroll settlement engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use nomina_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more inputs failed validation. Carries the complete list of
    /// field-level violations, never just the first.
    #[error("Validation failed: {}", format_violations(.violations))]
    Validation {
        /// Every violation found in the inputs.
        violations: Vec<Violation>,
    },

    /// The referenced employee does not exist in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No payroll batch exists for the requested period.
    #[error("Payroll batch not found for period {period_id}")]
    BatchNotFound {
        /// The period identifier that was not found.
        period_id: String,
    },

    /// A mutation was attempted against an approved (closed) batch.
    #[error("Payroll batch for period {period_id} is approved and closed")]
    BatchClosed {
        /// The period identifier of the closed batch.
        period_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds a validation error from a list of violations.
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation { violations }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_all_violations() {
        let error = EngineError::Validation {
            violations: vec![
                Violation::new("days_worked", "must be between 0 and 30"),
                Violation::new("loan_deduction", "must not be negative"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Validation failed: days_worked: must be between 0 and 30; \
             loan_deduction: must not be negative"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "emp_042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_042");
    }

    #[test]
    fn test_batch_not_found_displays_period() {
        let error = EngineError::BatchNotFound {
            period_id: "2025-S31".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payroll batch not found for period 2025-S31"
        );
    }

    #[test]
    fn test_batch_closed_displays_period() {
        let error = EngineError::BatchClosed {
            period_id: "2025-S31".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payroll batch for period 2025-S31 is approved and closed"
        );
    }

    #[test]
    fn test_config_parse_displays_path_and_message() {
        let error = EngineError::ConfigParse {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_violation_serialization() {
        let violation = Violation::new("bonus", "must not be negative");
        let json = serde_json::to_string(&violation).unwrap();
        assert!(json.contains("\"field\":\"bonus\""));
        assert!(json.contains("\"message\":\"must not be negative\""));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
