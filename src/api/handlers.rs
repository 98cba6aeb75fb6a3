//! HTTP request handlers for the Tour Payroll Reporting Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{TourWarnings, aggregate};
use crate::calculation::calculate_breakdown;
use crate::models::{TourRecord, set_group_paid_status};

use super::request::{PaidStatusRequest, ReportRequest, TourRecordRequest};
use super::response::{ApiError, BreakdownResponse, PaidStatusResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports", post(reports_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/payment-status", post(payment_status_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to the API error shape.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Coerces submitted tour requests into domain records, collecting the
/// per-tour coercion warnings.
fn coerce_tours(requests: Vec<TourRecordRequest>) -> (Vec<TourRecord>, Vec<TourWarnings>) {
    let mut tours = Vec::with_capacity(requests.len());
    let mut all_warnings = Vec::new();

    for request in requests {
        let (record, warnings) = request.into_record();
        if !warnings.is_empty() {
            all_warnings.push(TourWarnings {
                tour_id: record.tour_id.clone(),
                warnings,
            });
        }
        tours.push(record);
    }

    (tours, all_warnings)
}

/// Handler for the POST /reports endpoint.
///
/// Applies the optional filter to the submitted snapshot, aggregates the
/// result, and returns the report together with input coercion warnings.
async fn reports_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let (tours, input_warnings) = coerce_tours(request.tours);
    let filter = request.filter.unwrap_or_default();
    let filtered = filter.apply(&tours);
    let report = aggregate(&filtered, state.policy());

    info!(
        correlation_id = %correlation_id,
        submitted = tours.len(),
        included = filtered.len(),
        net = %report.totals.totals.net,
        "Report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReportResponse {
            report,
            input_warnings,
        }),
    )
        .into_response()
}

/// Handler for the POST /breakdown endpoint.
///
/// Derives the financial breakdown of a single tour, returning both the
/// full-precision values and a two-decimal presentation copy.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<TourRecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let (record, mut warnings) = request.into_record();
    let outcome = calculate_breakdown(&record, state.policy());
    warnings.extend(outcome.warnings);

    if !warnings.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            tour_id = %record.tour_id,
            warning_count = warnings.len(),
            "Breakdown derived with fallbacks"
        );
    }

    info!(
        correlation_id = %correlation_id,
        tour_id = %record.tour_id,
        net = %outcome.breakdown.net,
        "Breakdown computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(BreakdownResponse {
            tour_id: record.tour_id,
            presentation: outcome.breakdown.presentation(),
            breakdown: outcome.breakdown,
            warnings,
        }),
    )
        .into_response()
}

/// Handler for the POST /payment-status endpoint.
///
/// Applies the month+agency paid-status command to the submitted snapshot,
/// then recomputes the report over the refreshed snapshot. Nothing is
/// persisted; the caller owns the snapshot.
async fn payment_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaidStatusRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payment-status request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let (mut tours, _input_warnings) = coerce_tours(request.tours);
    let updated = set_group_paid_status(
        &mut tours,
        request.month,
        &request.agency_id,
        request.is_paid,
    );

    if updated == 0 {
        warn!(
            correlation_id = %correlation_id,
            month = %request.month,
            agency_id = %request.agency_id,
            "Payment-status command matched no tours"
        );
    }

    let report = aggregate(&tours, state.policy());

    info!(
        correlation_id = %correlation_id,
        month = %request.month,
        agency_id = %request.agency_id,
        is_paid = request.is_paid,
        updated,
        "Payment status applied"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PaidStatusResponse {
            updated,
            tours,
            report,
        }),
    )
        .into_response()
}
