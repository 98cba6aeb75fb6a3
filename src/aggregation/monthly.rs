//! Month-level grouping with nested agency subtotals.
//!
//! Tours are grouped by calendar month (chronologically ordered) and, inside
//! each month, by agency. The per-agency `all_paid` flag is what drives the
//! month+agency "mark as paid" toggle at the boundary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{MonthKey, PaymentStatus, TourRecord};

use super::ComputedTour;
use super::totals::GroupTotals;

/// Per-agency subtotal inside one month group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAgencySubtotal {
    /// Identifier of the agency, as needed by the paid-status command.
    pub agency_id: String,
    /// Display name of the agency.
    pub agency_name: String,
    /// Net compensation owed by this agency for the month.
    pub net: Decimal,
    /// Number of tours in this month for this agency.
    pub tour_count: u64,
    /// True iff every member tour has been settled.
    pub all_paid: bool,
}

/// One calendar month's worth of tours with folded totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGroup {
    /// The month key (chronological ordering).
    pub month: MonthKey,
    /// Display label, e.g. "June 2026".
    pub label: String,
    /// Folded totals over the month's tours.
    pub totals: GroupTotals,
    /// Agency subtotals, ordered by first occurrence within the month.
    pub agencies: Vec<MonthAgencySubtotal>,
    /// Member tours, in original input order.
    pub tours: Vec<TourRecord>,
}

/// Groups computed tours by calendar month, chronologically.
///
/// Tours without a usable date are skipped here; they still appear in the
/// agency grouping and the grand totals.
pub fn group_by_month(computed: &[ComputedTour]) -> Vec<MonthGroup> {
    let mut months: BTreeMap<MonthKey, MonthGroup> = BTreeMap::new();

    for entry in computed {
        let Some(date) = entry.tour.tour_date else {
            continue;
        };
        let key = MonthKey::from_date(date);

        let group = months.entry(key).or_insert_with(|| MonthGroup {
            month: key,
            label: key.label(),
            totals: GroupTotals::default(),
            agencies: Vec::new(),
            tours: Vec::new(),
        });

        group.totals.record(&entry.tour, &entry.breakdown);

        let agency_id = &entry.tour.agency_id;
        let position = match group.agencies.iter().position(|a| a.agency_id == *agency_id) {
            Some(position) => position,
            None => {
                group.agencies.push(MonthAgencySubtotal {
                    agency_id: agency_id.clone(),
                    agency_name: entry.tour.agency_name.clone(),
                    net: Decimal::ZERO,
                    tour_count: 0,
                    all_paid: true,
                });
                group.agencies.len() - 1
            }
        };
        let subtotal = &mut group.agencies[position];
        subtotal.net += entry.breakdown.net;
        subtotal.tour_count += 1;
        subtotal.all_paid &= entry.tour.payment_status == PaymentStatus::Paid;

        group.tours.push(entry.tour.clone());
    }

    months.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_breakdown;
    use crate::config::PayrollPolicy;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn computed(
        id: &str,
        tour_date: Option<&str>,
        agency_id: &str,
        status: PaymentStatus,
    ) -> ComputedTour {
        let tour = TourRecord {
            tour_id: id.to_string(),
            tour_date: tour_date.map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()),
            base_price: dec("100"),
            calculation_scenario: 1,
            agency_id: agency_id.to_string(),
            agency_name: format!("Agency {}", agency_id),
            ship_name: "Aurora".to_string(),
            tour_type_name: "City Walk".to_string(),
            payment_status: status,
            tip_eur: Decimal::ZERO,
            tip_usd: Decimal::ZERO,
        };
        let breakdown = calculate_breakdown(&tour, &PayrollPolicy::default()).breakdown;
        ComputedTour { tour, breakdown }
    }

    /// MG-001: months come out chronologically ordered
    #[test]
    fn test_months_are_chronological() {
        let entries = vec![
            computed("t1", Some("2026-07-10"), "ag_1", PaymentStatus::Unpaid),
            computed("t2", Some("2026-05-02"), "ag_1", PaymentStatus::Unpaid),
            computed("t3", Some("2025-12-24"), "ag_1", PaymentStatus::Unpaid),
        ];

        let months = group_by_month(&entries);
        let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();

        assert_eq!(labels, vec!["December 2025", "May 2026", "July 2026"]);
    }

    /// MG-002: agency subtotals nest inside the month with correct nets
    #[test]
    fn test_agency_subtotals_nest_inside_month() {
        let entries = vec![
            computed("t1", Some("2026-06-05"), "ag_1", PaymentStatus::Unpaid),
            computed("t2", Some("2026-06-12"), "ag_2", PaymentStatus::Unpaid),
            computed("t3", Some("2026-06-20"), "ag_1", PaymentStatus::Unpaid),
        ];

        let months = group_by_month(&entries);
        assert_eq!(months.len(), 1);

        let month = &months[0];
        assert_eq!(month.totals.tour_count, 3);
        assert_eq!(month.agencies.len(), 2);

        let ag_1 = &month.agencies[0];
        assert_eq!(ag_1.agency_id, "ag_1");
        assert_eq!(ag_1.tour_count, 2);
        assert_eq!(ag_1.net, entries[0].breakdown.net + entries[2].breakdown.net);

        let subtotal_sum: Decimal = month.agencies.iter().map(|a| a.net).sum();
        assert_eq!(subtotal_sum, month.totals.net);
    }

    /// MG-003: all_paid is true only when every member tour is paid
    #[test]
    fn test_all_paid_requires_every_tour_settled() {
        let entries = vec![
            computed("t1", Some("2026-06-05"), "ag_1", PaymentStatus::Paid),
            computed("t2", Some("2026-06-12"), "ag_1", PaymentStatus::Unpaid),
            computed("t3", Some("2026-06-20"), "ag_2", PaymentStatus::Paid),
        ];

        let months = group_by_month(&entries);
        let month = &months[0];

        assert!(!month.agencies[0].all_paid);
        assert!(month.agencies[1].all_paid);
    }

    /// MG-004: undated tours are excluded from month groups
    #[test]
    fn test_undated_tours_are_excluded() {
        let entries = vec![
            computed("t1", Some("2026-06-05"), "ag_1", PaymentStatus::Unpaid),
            computed("t2", None, "ag_1", PaymentStatus::Unpaid),
        ];

        let months = group_by_month(&entries);

        assert_eq!(months.len(), 1);
        assert_eq!(months[0].totals.tour_count, 1);
    }

    #[test]
    fn test_member_tours_keep_input_order() {
        let entries = vec![
            computed("t1", Some("2026-06-20"), "ag_1", PaymentStatus::Unpaid),
            computed("t2", Some("2026-06-05"), "ag_2", PaymentStatus::Unpaid),
            computed("t3", Some("2026-06-12"), "ag_1", PaymentStatus::Unpaid),
        ];

        let months = group_by_month(&entries);
        let ids: Vec<&str> = months[0].tours.iter().map(|t| t.tour_id.as_str()).collect();

        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_empty_input_yields_no_months() {
        assert!(group_by_month(&[]).is_empty());
    }
}
