//! Calendar-month grouping key.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month used as a grouping key.
///
/// Ordering is chronological (year first, then month), which keeps month
/// groupings sorted when folded into an ordered map.
///
/// # Example
///
/// ```
/// use tour_engine::models::MonthKey;
/// use chrono::NaiveDate;
///
/// let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
/// assert_eq!(key.label(), "June 2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1-indexed.
    pub month: u32,
}

impl MonthKey {
    /// Builds the key for the month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the display label, e.g. "June 2026".
    ///
    /// An out-of-calendar month (possible on deserialized input) falls back
    /// to the numeric form rather than panicking.
    pub fn label(&self) -> String {
        match self.month {
            1..=12 => format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year),
            _ => format!("{} {}", self.month, self.year),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
