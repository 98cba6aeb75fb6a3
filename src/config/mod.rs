//! Payroll policy configuration for the reporting engine.
//!
//! This module provides the [`PayrollPolicy`] type holding every statutory
//! rate used by the financial calculator and the tip analytics, plus a
//! [`ConfigLoader`] that reads a policy from a YAML file so jurisdiction or
//! exchange-rate changes never require touching computation logic.
//!
//! # Example
//!
//! ```no_run
//! use tour_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Tax rate: {}", loader.policy().tax_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MonthRange, PayrollPolicy};
