//! Same-day tour density histogram.
//!
//! Tours are grouped by exact calendar date and each date is classified into
//! exactly one load bucket: one tour, two tours, or three and more. Buckets
//! keep the dates and the comma-joined ship names for drill-down display.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TourRecord;

/// One calendar date's tour load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDetail {
    /// The calendar date.
    pub date: NaiveDate,
    /// Number of tours on that date.
    pub tour_count: u64,
    /// Ship names of the day's tours, comma-joined in input order.
    pub ships: String,
}

/// The dates falling into one load bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityBucket {
    /// Number of dates in this bucket.
    pub day_count: u64,
    /// The dates themselves, chronological.
    pub days: Vec<DayDetail>,
}

impl DensityBucket {
    fn push(&mut self, detail: DayDetail) {
        self.day_count += 1;
        self.days.push(detail);
    }
}

/// The same-day density histogram over one filtered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDensityReport {
    /// Dates with exactly one tour.
    pub one_tour: DensityBucket,
    /// Dates with exactly two tours.
    pub two_tours: DensityBucket,
    /// Dates with three or more tours.
    pub three_plus: DensityBucket,
    /// Every date with at least one tour, chronological.
    pub days: Vec<DayDetail>,
}

/// Builds the density histogram.
///
/// Tours without a usable date are skipped; the histogram is date-defined.
pub fn fold_density(tours: &[TourRecord]) -> DayDensityReport {
    let mut per_day: BTreeMap<NaiveDate, Vec<&TourRecord>> = BTreeMap::new();
    for tour in tours {
        let Some(date) = tour.tour_date else { continue };
        per_day.entry(date).or_default().push(tour);
    }

    let mut report = DayDensityReport::default();
    for (date, day_tours) in per_day {
        let ships: Vec<&str> = day_tours.iter().map(|t| t.ship_name.as_str()).collect();
        let detail = DayDetail {
            date,
            tour_count: day_tours.len() as u64,
            ships: ships.join(", "),
        };

        match day_tours.len() {
            1 => report.one_tour.push(detail.clone()),
            2 => report.two_tours.push(detail.clone()),
            _ => report.three_plus.push(detail.clone()),
        }
        report.days.push(detail);
    }

    report
}
