//! HTTP API for the Tour Payroll Reporting Engine.
//!
//! This module exposes the engine over axum: a report endpoint folding a
//! submitted tour snapshot, a single-tour breakdown endpoint, and the
//! month+agency paid-status command applied to a submitted snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PaidStatusRequest, ReportRequest, TourRecordRequest};
pub use response::{ApiError, BreakdownResponse, PaidStatusResponse, ReportResponse};
pub use state::AppState;
