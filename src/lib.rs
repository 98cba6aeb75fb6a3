//! Payroll Reporting Engine for agency-sold guided cruise tours
//!
//! This crate derives a per-tour financial breakdown (base fee, seasonal bonus,
//! allowances, statutory deduction, tax, net) under scenario-specific payroll
//! formulas, and folds many such breakdowns into month, agency, tip, and
//! tour-density summaries for financial reporting.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
