//! Application state for the HTTP API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollPolicy};

/// Shared application state.
///
/// Holds the loaded payroll policy behind an `Arc` so handlers can share it
/// without copying.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the active payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }
}
