//! Seasonal bonus determination.
//!
//! The jurisdiction pays a higher bonus rate during the Easter period, which
//! the payroll rule approximates as a fixed calendar-month window. A tour
//! without a usable date is treated as outside that window, matching the
//! upstream system's behavior for malformed dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::PayrollPolicy;

/// Which seasonal bonus applies to a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusSeason {
    /// The tour falls inside the Easter month window.
    Easter,
    /// The tour falls outside the window (or has no usable date).
    Christmas,
}

/// The resolved seasonal bonus: season, rate, and display label.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalBonus {
    /// The season the tour falls in.
    pub season: BonusSeason,
    /// The bonus rate to apply to the base price.
    pub rate: Decimal,
    /// The bonus label, retained verbatim for display.
    pub name: String,
}

/// Resolves the seasonal bonus for a tour date under the given policy.
///
/// The Easter window is the policy's inclusive month range (1-indexed
/// calendar months). This is a deliberate proxy for a floating holiday; do
/// not replace it with a real holiday calendar without a policy revision.
pub fn seasonal_bonus(tour_date: Option<NaiveDate>, policy: &PayrollPolicy) -> SeasonalBonus {
    let in_easter_period = tour_date
        .map(|date| policy.easter_months.contains(date.month()))
        .unwrap_or(false);

    if in_easter_period {
        SeasonalBonus {
            season: BonusSeason::Easter,
            rate: policy.easter_bonus_rate,
            name: policy.easter_bonus_name.clone(),
        }
    } else {
        SeasonalBonus {
            season: BonusSeason::Christmas,
            rate: policy.christmas_bonus_rate,
            name: policy.christmas_bonus_name.clone(),
        }
    }
}
