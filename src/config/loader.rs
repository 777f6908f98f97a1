//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading legal
//! configuration from YAML files.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DivisorRule, LegalConfig};

/// Divisor schedule file structure.
#[derive(Debug, Clone, Deserialize)]
struct DivisorsFile {
    divisors: Vec<DivisorRule>,
}

/// Loads and provides access to the legal configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the assembled [`LegalConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/colombia/
/// ├── legal.yaml     # Wage, subsidy, percentages, divisor, factors
/// └── divisors.yaml  # Historical hourly divisor schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/colombia").unwrap();
/// println!("Minimum wage: {}", loader.config().minimum_wage);
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// println!("Divisor on {}: {}", date, loader.divisor_for_date(date));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LegalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/colombia")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let legal_path = path.join("legal.yaml");
        let mut config = Self::load_yaml::<LegalConfig>(&legal_path)?;

        let divisors_path = path.join("divisors.yaml");
        let divisors = Self::load_yaml::<DivisorsFile>(&divisors_path)?;

        let mut schedule = divisors.divisors;
        schedule.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        config.divisor_schedule = schedule;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the assembled legal configuration.
    pub fn config(&self) -> &LegalConfig {
        &self.config
    }

    /// Consumes the loader, returning the owned configuration.
    pub fn into_config(self) -> LegalConfig {
        self.config
    }

    /// Returns the hourly divisor in force on a given date.
    pub fn divisor_for_date(&self, date: NaiveDate) -> u32 {
        self.config.divisor_for_date(date)
    }
}
