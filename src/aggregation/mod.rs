//! Aggregation engine for the Tour Payroll Reporting Engine.
//!
//! Folds a filtered set of tour records into the report consumed by the
//! presentation layer: grand totals, month groups with nested agency
//! subtotals, flat agency groups, tip analytics, and the same-day density
//! histogram. Each tour's breakdown is computed exactly once and shared by
//! every fold, so the groupings always reconcile with the grand totals.
//!
//! The whole module is pure: aggregation is a total function of the input
//! snapshot and the policy, it holds no cross-call state, and re-running it
//! over the same snapshot yields the same report.

mod agency;
mod density;
mod monthly;
mod tips;
mod totals;

use serde::{Deserialize, Serialize};

use crate::calculation::calculate_breakdown;
use crate::config::PayrollPolicy;
use crate::models::{CalculationWarning, FinancialBreakdown, TourRecord};

pub use agency::{AgencyGroup, group_by_agency};
pub use density::{DayDensityReport, DayDetail, DensityBucket, fold_density};
pub use monthly::{MonthAgencySubtotal, MonthGroup, group_by_month};
pub use tips::{MonthTipGroup, NamedTipGroup, TipGroup, TipReport, fold_tips};
pub use totals::{GrandTotals, GroupTotals, fold_grand_totals};

/// A tour record paired with its computed breakdown.
///
/// The folds all consume this shape so the breakdown is derived once per
/// tour rather than once per grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedTour {
    /// The input record.
    pub tour: TourRecord,
    /// Its derived financial breakdown.
    pub breakdown: FinancialBreakdown,
}

/// The warnings raised while computing one tour's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourWarnings {
    /// The tour the warnings belong to.
    pub tour_id: String,
    /// The warnings, in the order they were raised.
    pub warnings: Vec<CalculationWarning>,
}

/// The complete aggregation output over one filtered set of tours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Grand totals over every tour in scope.
    pub totals: GrandTotals,
    /// Month groups, chronological, with nested agency subtotals.
    pub months: Vec<MonthGroup>,
    /// Flat agency groups in first-occurrence order.
    pub agencies: Vec<AgencyGroup>,
    /// Tip analytics.
    pub tips: TipReport,
    /// Same-day density histogram.
    pub day_density: DayDensityReport,
    /// Per-tour data-quality warnings; empty for clean input.
    pub warnings: Vec<TourWarnings>,
}

/// Aggregates a filtered set of tours under the given policy.
///
/// Total over any input including the empty list: an empty set folds to
/// all-zero totals and empty groupings, and no derived average divides by
/// zero. The caller is responsible for filtering (see
/// [`ReportFilter`](crate::models::ReportFilter)); this function treats its
/// input as the complete scope.
pub fn aggregate(tours: &[TourRecord], policy: &PayrollPolicy) -> AggregateReport {
    let mut warnings = Vec::new();
    let mut computed = Vec::with_capacity(tours.len());

    for tour in tours {
        let outcome = calculate_breakdown(tour, policy);
        if !outcome.is_clean() {
            warnings.push(TourWarnings {
                tour_id: tour.tour_id.clone(),
                warnings: outcome.warnings,
            });
        }
        computed.push(ComputedTour {
            tour: tour.clone(),
            breakdown: outcome.breakdown,
        });
    }

    AggregateReport {
        totals: fold_grand_totals(&computed),
        months: group_by_month(&computed),
        agencies: group_by_agency(&computed),
        tips: fold_tips(tours, policy),
        day_density: fold_density(tours),
        warnings,
    }
}
