//! Response types for the HTTP API.
//!
//! This module defines the success bodies for the three endpoints and the
//! error response structure shared by all of them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::aggregation::{AggregateReport, TourWarnings};
use crate::error::EngineError;
use crate::models::{FinancialBreakdown, TourRecord};

/// Response body for the `/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownResponse {
    /// The tour the breakdown belongs to.
    pub tour_id: String,
    /// The full-precision breakdown.
    pub breakdown: FinancialBreakdown,
    /// The same breakdown rounded to two decimals for display.
    pub presentation: FinancialBreakdown,
    /// Warnings raised while coercing input and deriving the breakdown.
    pub warnings: Vec<crate::models::CalculationWarning>,
}

/// Response body for the `/reports` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// The aggregated report over the filtered snapshot.
    pub report: AggregateReport,
    /// Coercion warnings raised while parsing the submitted tours,
    /// keyed per tour and covering the snapshot before filtering.
    pub input_warnings: Vec<TourWarnings>,
}

/// Response body for the `/payment-status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidStatusResponse {
    /// Number of tours whose settlement state changed.
    pub updated: usize,
    /// The refreshed snapshot after applying the command.
    pub tours: Vec<TourRecord>,
    /// The report recomputed over the refreshed snapshot.
    pub report: AggregateReport,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_POLICY",
                    format!("Invalid policy field '{}'", field),
                    message,
                ),
            },
        }
    }
}
