//! Error types for the Tour Payroll Reporting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation and aggregation core is total over its inputs and never
//! returns an error; these variants cover configuration loading and policy
//! validation, which are the only fallible operations in the crate.

use thiserror::Error;

/// The main error type for the Tour Payroll Reporting Engine.
///
/// # Example
///
/// ```
/// use tour_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded payroll policy contained an out-of-range value.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
