//! Tour record model and boundary operations.
//!
//! This module defines the [`TourRecord`] input type together with the two
//! boundary operations that surround the pure core: date/agency filtering and
//! the month+agency paid-status command.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::MonthKey;

/// Settlement state of a tour's compensation.
///
/// Upstream systems store this as free text; anything other than the exact
/// string "Paid" counts as unpaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum PaymentStatus {
    /// The agency has settled the tour.
    Paid,
    /// Settlement is outstanding.
    Unpaid,
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        if value == "Paid" {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

/// One scheduled guided tour sold through an agency.
///
/// Records are immutable inputs owned by the caller. Numeric fields are
/// already coerced at the boundary: a missing or unparseable base price or
/// tip arrives here as zero, and a missing or unparseable date as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourRecord {
    /// Unique identifier for the tour.
    pub tour_id: String,
    /// Calendar date of the tour; `None` when the upstream date was unusable.
    pub tour_date: Option<NaiveDate>,
    /// Agreed net tour fee before statutory adjustments.
    pub base_price: Decimal,
    /// Raw payroll formula selector belonging to the tour's agency.
    pub calculation_scenario: i32,
    /// Identifier of the selling agency.
    pub agency_id: String,
    /// Display name of the selling agency.
    pub agency_name: String,
    /// Name of the cruise ship the passengers arrived on.
    pub ship_name: String,
    /// Name of the tour type.
    pub tour_type_name: String,
    /// Settlement state.
    pub payment_status: PaymentStatus,
    /// Tip received in euros.
    pub tip_eur: Decimal,
    /// Tip received in US dollars.
    pub tip_usd: Decimal,
}

impl TourRecord {
    /// Returns true when the tour carries a tip in either currency.
    pub fn has_tip(&self) -> bool {
        self.tip_eur > Decimal::ZERO || self.tip_usd > Decimal::ZERO
    }
}

/// Date-range and agency filter applied before aggregation.
///
/// Date bounds are inclusive on both ends; the agency match is exact. A tour
/// without a usable date passes only when no date bound is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Earliest tour date to include, inclusive.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Latest tour date to include, inclusive.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Restrict to a single agency by identifier.
    #[serde(default)]
    pub agency_id: Option<String>,
}

impl ReportFilter {
    /// Returns true when the tour satisfies every bound in the filter.
    pub fn matches(&self, tour: &TourRecord) -> bool {
        if let Some(from) = self.date_from {
            match tour.tour_date {
                Some(date) if date >= from => {}
                _ => return false,
            }
        }

        if let Some(to) = self.date_to {
            match tour.tour_date {
                Some(date) if date <= to => {}
                _ => return false,
            }
        }

        if let Some(agency_id) = &self.agency_id {
            if tour.agency_id != *agency_id {
                return false;
            }
        }

        true
    }

    /// Returns the tours satisfying the filter, in their original order.
    pub fn apply(&self, tours: &[TourRecord]) -> Vec<TourRecord> {
        tours.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Marks every tour of the given month and agency as paid or unpaid.
///
/// This is the boundary command behind the month+agency "mark as paid"
/// toggle. It mutates the caller's snapshot in place and returns the number
/// of tours updated; the caller is expected to re-run aggregation on the
/// refreshed snapshot, since existing reports are not updated retroactively.
/// Tours without a usable date never match.
pub fn set_group_paid_status(
    tours: &mut [TourRecord],
    month: MonthKey,
    agency_id: &str,
    is_paid: bool,
) -> usize {
    let status = if is_paid {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Unpaid
    };

    let mut updated = 0;
    for tour in tours.iter_mut() {
        let in_month = tour
            .tour_date
            .map(|date| MonthKey::from_date(date) == month)
            .unwrap_or(false);
        if in_month && tour.agency_id == agency_id {
            tour.payment_status = status;
            updated += 1;
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn tour(id: &str, tour_date: Option<&str>, agency_id: &str) -> TourRecord {
        TourRecord {
            tour_id: id.to_string(),
            tour_date: tour_date.map(date),
            base_price: dec("100"),
            calculation_scenario: 1,
            agency_id: agency_id.to_string(),
            agency_name: format!("Agency {}", agency_id),
            ship_name: "Aurora".to_string(),
            tour_type_name: "City Walk".to_string(),
            payment_status: PaymentStatus::Unpaid,
            tip_eur: Decimal::ZERO,
            tip_usd: Decimal::ZERO,
        }
    }

    /// TR-001: non-"Paid" strings deserialize as unpaid
    #[test]
    fn test_payment_status_treats_other_strings_as_unpaid() {
        let paid: PaymentStatus = serde_json::from_str("\"Paid\"").unwrap();
        let pending: PaymentStatus = serde_json::from_str("\"Pending\"").unwrap();
        let lowercase: PaymentStatus = serde_json::from_str("\"paid\"").unwrap();
        let empty: PaymentStatus = serde_json::from_str("\"\"").unwrap();

        assert_eq!(paid, PaymentStatus::Paid);
        assert_eq!(pending, PaymentStatus::Unpaid);
        assert_eq!(lowercase, PaymentStatus::Unpaid);
        assert_eq!(empty, PaymentStatus::Unpaid);
    }

    /// TR-002: date bounds are inclusive on both ends
    #[test]
    fn test_filter_date_bounds_are_inclusive() {
        let filter = ReportFilter {
            date_from: Some(date("2026-06-01")),
            date_to: Some(date("2026-06-30")),
            agency_id: None,
        };

        assert!(filter.matches(&tour("t1", Some("2026-06-01"), "ag_1")));
        assert!(filter.matches(&tour("t2", Some("2026-06-30"), "ag_1")));
        assert!(!filter.matches(&tour("t3", Some("2026-05-31"), "ag_1")));
        assert!(!filter.matches(&tour("t4", Some("2026-07-01"), "ag_1")));
    }

    /// TR-003: agency filter is an exact match
    #[test]
    fn test_filter_agency_is_exact_match() {
        let filter = ReportFilter {
            agency_id: Some("ag_1".to_string()),
            ..ReportFilter::default()
        };

        assert!(filter.matches(&tour("t1", Some("2026-06-01"), "ag_1")));
        assert!(!filter.matches(&tour("t2", Some("2026-06-01"), "ag_10")));
    }

    /// TR-004: undated tours pass only without date bounds
    #[test]
    fn test_undated_tour_passes_only_without_date_bounds() {
        let unbounded = ReportFilter::default();
        let bounded = ReportFilter {
            date_from: Some(date("2026-01-01")),
            ..ReportFilter::default()
        };
        let undated = tour("t1", None, "ag_1");

        assert!(unbounded.matches(&undated));
        assert!(!bounded.matches(&undated));
    }

    #[test]
    fn test_apply_preserves_original_order() {
        let tours = vec![
            tour("t1", Some("2026-06-20"), "ag_1"),
            tour("t2", Some("2026-06-05"), "ag_2"),
            tour("t3", Some("2026-06-10"), "ag_1"),
        ];
        let filter = ReportFilter {
            agency_id: Some("ag_1".to_string()),
            ..ReportFilter::default()
        };

        let filtered = filter.apply(&tours);
        let ids: Vec<&str> = filtered.iter().map(|t| t.tour_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
    }

    /// TR-005: paid-status command touches only the matching month+agency
    #[test]
    fn test_set_group_paid_status_updates_matching_tours() {
        let mut tours = vec![
            tour("t1", Some("2026-06-05"), "ag_1"),
            tour("t2", Some("2026-06-20"), "ag_1"),
            tour("t3", Some("2026-06-12"), "ag_2"),
            tour("t4", Some("2026-07-05"), "ag_1"),
            tour("t5", None, "ag_1"),
        ];

        let updated =
            set_group_paid_status(&mut tours, MonthKey { year: 2026, month: 6 }, "ag_1", true);

        assert_eq!(updated, 2);
        assert_eq!(tours[0].payment_status, PaymentStatus::Paid);
        assert_eq!(tours[1].payment_status, PaymentStatus::Paid);
        assert_eq!(tours[2].payment_status, PaymentStatus::Unpaid);
        assert_eq!(tours[3].payment_status, PaymentStatus::Unpaid);
        assert_eq!(tours[4].payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_set_group_paid_status_can_revert_to_unpaid() {
        let mut tours = vec![tour("t1", Some("2026-06-05"), "ag_1")];
        tours[0].payment_status = PaymentStatus::Paid;

        let updated =
            set_group_paid_status(&mut tours, MonthKey { year: 2026, month: 6 }, "ag_1", false);

        assert_eq!(updated, 1);
        assert_eq!(tours[0].payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_has_tip_in_either_currency() {
        let mut with_eur = tour("t1", Some("2026-06-05"), "ag_1");
        with_eur.tip_eur = dec("5");
        let mut with_usd = tour("t2", Some("2026-06-05"), "ag_1");
        with_usd.tip_usd = dec("3");
        let without = tour("t3", Some("2026-06-05"), "ag_1");

        assert!(with_eur.has_tip());
        assert!(with_usd.has_tip());
        assert!(!without.has_tip());
    }

    #[test]
    fn test_tour_record_serde_round_trip() {
        let record = tour("t1", Some("2026-06-05"), "ag_1");
        let json = serde_json::to_string(&record).unwrap();
        let back: TourRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
