//! Tip analytics.
//!
//! Three independent tip groupings over the filtered set: by month, by ship,
//! and by tour type. Every tour joins its group (membership is not
//! tip-conditional) but only tip-bearing tours increment `tours_with_tip`,
//! which keeps the derived average well-defined without dividing by zero.
//! Ship and tour-type listings rank descending by EUR-equivalent value using
//! the policy's fixed conversion rate.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollPolicy;
use crate::models::{MonthKey, TourRecord};

/// Tip sums for one group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipGroup {
    /// Sum of tips received in euros.
    pub eur: Decimal,
    /// Sum of tips received in US dollars.
    pub usd: Decimal,
    /// Number of member tours that carried a tip in either currency.
    pub tours_with_tip: u64,
}

impl TipGroup {
    /// Folds one tour's tips into the group.
    pub fn record(&mut self, tour: &TourRecord) {
        self.eur += tour.tip_eur;
        self.usd += tour.tip_usd;
        if tour.has_tip() {
            self.tours_with_tip += 1;
        }
    }

    /// Combined tip value in euros at the given conversion rate.
    ///
    /// The conversion exists for ranking and comparison only; it never feeds
    /// back into compensation amounts.
    pub fn eur_equivalent(&self, usd_to_eur_rate: Decimal) -> Decimal {
        self.eur + self.usd * usd_to_eur_rate
    }

    /// Average EUR-equivalent tip per tip-bearing tour.
    ///
    /// `None` when the group has no tip-bearing tours.
    pub fn average_per_tipped_tour(&self, usd_to_eur_rate: Decimal) -> Option<Decimal> {
        if self.tours_with_tip == 0 {
            return None;
        }
        Some(self.eur_equivalent(usd_to_eur_rate) / Decimal::from(self.tours_with_tip))
    }
}

/// Tip sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTipGroup {
    /// The month key.
    pub month: MonthKey,
    /// Display label, e.g. "June 2026".
    pub label: String,
    /// The folded tip sums.
    pub tips: TipGroup,
    /// Combined value in euros at the policy conversion rate.
    pub eur_equivalent: Decimal,
    /// Average per tip-bearing tour, when any exists.
    pub average_per_tipped_tour: Option<Decimal>,
}

/// Tip sums for one named group (a ship or a tour type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTipGroup {
    /// The ship or tour-type name.
    pub name: String,
    /// The folded tip sums.
    pub tips: TipGroup,
    /// Combined value in euros at the policy conversion rate.
    pub eur_equivalent: Decimal,
    /// Average per tip-bearing tour, when any exists.
    pub average_per_tipped_tour: Option<Decimal>,
}

/// The three tip groupings over one filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipReport {
    /// Tips per calendar month, chronological. Undated tours are excluded.
    pub by_month: Vec<MonthTipGroup>,
    /// Tips per ship, descending by EUR-equivalent value.
    pub by_ship: Vec<NamedTipGroup>,
    /// Tips per tour type, descending by EUR-equivalent value.
    pub by_tour_type: Vec<NamedTipGroup>,
}

/// Folds the tip analytics for a set of tours.
pub fn fold_tips(tours: &[TourRecord], policy: &PayrollPolicy) -> TipReport {
    let rate = policy.usd_to_eur_rate;

    let mut by_month: BTreeMap<MonthKey, TipGroup> = BTreeMap::new();
    for tour in tours {
        let Some(date) = tour.tour_date else { continue };
        by_month.entry(MonthKey::from_date(date)).or_default().record(tour);
    }

    let by_month = by_month
        .into_iter()
        .map(|(month, tips)| MonthTipGroup {
            month,
            label: month.label(),
            eur_equivalent: tips.eur_equivalent(rate),
            average_per_tipped_tour: tips.average_per_tipped_tour(rate),
            tips,
        })
        .collect();

    TipReport {
        by_month,
        by_ship: fold_named(tours, rate, |tour| &tour.ship_name),
        by_tour_type: fold_named(tours, rate, |tour| &tour.tour_type_name),
    }
}

/// Folds a named grouping (ship or tour type) and ranks it by value.
///
/// Groups are built in first-occurrence order; the descending sort is stable,
/// so equal-value groups keep that order.
fn fold_named<'a, F>(tours: &'a [TourRecord], rate: Decimal, key: F) -> Vec<NamedTipGroup>
where
    F: Fn(&'a TourRecord) -> &'a str,
{
    let mut groups: Vec<(String, TipGroup)> = Vec::new();

    for tour in tours {
        let name = key(tour);
        let position = match groups.iter().position(|(existing, _)| existing == name) {
            Some(position) => position,
            None => {
                groups.push((name.to_string(), TipGroup::default()));
                groups.len() - 1
            }
        };
        groups[position].1.record(tour);
    }

    let mut named: Vec<NamedTipGroup> = groups
        .into_iter()
        .map(|(name, tips)| NamedTipGroup {
            name,
            eur_equivalent: tips.eur_equivalent(rate),
            average_per_tipped_tour: tips.average_per_tipped_tour(rate),
            tips,
        })
        .collect();
    named.sort_by(|a, b| b.eur_equivalent.cmp(&a.eur_equivalent));
    named
}
