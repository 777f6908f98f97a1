//! Application state for the payroll settlement engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::LegalConfig;
use crate::models::PayrollBatch;
use crate::roster::Roster;

/// Shared application state.
///
/// Holds the legal configuration (read-only during a calculation), the
/// employee roster, and the per-period batch documents.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RwLock<LegalConfig>>,
    roster: Arc<RwLock<Roster>>,
    batches: Arc<RwLock<HashMap<String, PayrollBatch>>>,
}

impl AppState {
    /// Creates a new application state with an empty roster.
    pub fn new(config: LegalConfig) -> Self {
        Self::with_roster(config, Roster::new())
    }

    /// Creates a new application state seeded with a roster.
    pub fn with_roster(config: LegalConfig, roster: Roster) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            roster: Arc::new(RwLock::new(roster)),
            batches: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the legal configuration lock.
    pub fn config(&self) -> &RwLock<LegalConfig> {
        &self.config
    }

    /// Returns the employee roster lock.
    pub fn roster(&self) -> &RwLock<Roster> {
        &self.roster
    }

    /// Returns the per-period batch store lock.
    pub fn batches(&self) -> &RwLock<HashMap<String, PayrollBatch>> {
        &self.batches
    }
}
