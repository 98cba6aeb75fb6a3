//! Flat agency-level grouping.
//!
//! Agencies appear in first-occurrence order of the input, not
//! alphabetically, and each group's member tours stay in original input
//! order rather than date order. Both orderings are intentional: they match
//! how the surrounding application renders the listing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::TourRecord;

use super::ComputedTour;
use super::totals::GroupTotals;

/// One agency's tours with folded totals over the full filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyGroup {
    /// Display name of the agency (grouping key).
    pub agency_name: String,
    /// Folded totals over this agency's tours.
    pub totals: GroupTotals,
    /// Member tours, in original input order.
    pub tours: Vec<TourRecord>,
}

/// Groups computed tours by agency name in first-occurrence order.
///
/// Tours without a usable date are still included; the agency grouping is
/// not date-dependent.
pub fn group_by_agency(computed: &[ComputedTour]) -> Vec<AgencyGroup> {
    let mut groups: Vec<AgencyGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in computed {
        let name = &entry.tour.agency_name;
        let position = match index.get(name) {
            Some(&position) => position,
            None => {
                groups.push(AgencyGroup {
                    agency_name: name.clone(),
                    totals: GroupTotals::default(),
                    tours: Vec::new(),
                });
                index.insert(name.clone(), groups.len() - 1);
                groups.len() - 1
            }
        };

        let group = &mut groups[position];
        group.totals.record(&entry.tour, &entry.breakdown);
        group.tours.push(entry.tour.clone());
    }

    groups
}
