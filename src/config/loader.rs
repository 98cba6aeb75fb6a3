//! Policy loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! policy from a YAML file, with a built-in fallback carrying the statutory
//! default rates.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

/// Loads and provides access to the payroll policy.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/payroll/
/// └── policy.yaml   # statutory rates, bonus labels, Easter month range
/// ```
///
/// # Example
///
/// ```no_run
/// use tour_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Deduction rate: {}", loader.policy().statutory_deduction_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the policy file is
    /// missing, contains invalid YAML, or fails rate validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;
        policy.validate()?;

        Ok(Self { policy })
    }

    /// Creates a loader carrying the built-in statutory policy.
    ///
    /// Useful for tests and for hosts that do not ship a configuration
    /// directory.
    pub fn builtin() -> Self {
        Self {
            policy: PayrollPolicy::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
