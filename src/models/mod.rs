//! Data models for the Tour Payroll Reporting Engine.
//!
//! This module contains the input and output value types of the engine:
//! tour records supplied by the caller, the per-tour financial breakdown,
//! calculation warnings, and the calendar-month grouping key. All models are
//! plain values constructed fresh on every computation pass; nothing holds a
//! reference back to the engine.

mod breakdown;
mod period;
mod tour;

pub use breakdown::{BreakdownOutcome, CalculationWarning, FinancialBreakdown, Scenario};
pub use period::MonthKey;
pub use tour::{PaymentStatus, ReportFilter, TourRecord, set_group_paid_status};
