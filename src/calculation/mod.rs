//! Calculation logic for the Tour Payroll Reporting Engine.
//!
//! This module derives the financial breakdown of a single tour: seasonal
//! bonus determination and the scenario-specific payroll formulas covering
//! gross, statutory deduction, tax, and net compensation.

mod breakdown;
mod season;

pub use breakdown::calculate_breakdown;
pub use season::{BonusSeason, SeasonalBonus, seasonal_bonus};
