//! Folded monetary totals.
//!
//! [`GroupTotals`] is the reusable accumulator behind the grand totals and
//! every month/agency group: one `record` call per tour, full precision
//! throughout, so group totals always reconcile exactly with the grand
//! totals they partition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FinancialBreakdown, PaymentStatus, TourRecord};

use super::ComputedTour;

/// Running sums of every breakdown field for a set of tours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Number of tours folded in.
    pub tour_count: u64,
    /// Sum of base prices.
    pub base_price: Decimal,
    /// Sum of seasonal bonuses.
    pub bonus: Decimal,
    /// Sum of holiday allowances.
    pub holiday_allowance: Decimal,
    /// Sum of annual leave compensation.
    pub annual_leave: Decimal,
    /// Sum of gross compensation.
    pub gross: Decimal,
    /// Sum of reported statutory deductions.
    pub statutory_deduction: Decimal,
    /// Sum of reported tax.
    pub tax: Decimal,
    /// Sum of net compensation.
    pub net: Decimal,
    /// Net income from taxable tours.
    pub taxable_income: Decimal,
    /// Number of taxable tours.
    pub taxed_tours: u64,
    /// Net income from untaxed tours.
    pub untaxed_income: Decimal,
    /// Number of untaxed tours.
    pub untaxed_tours: u64,
    /// Net amount already settled by agencies.
    pub paid_amount: Decimal,
    /// Net amount still outstanding.
    pub unpaid_amount: Decimal,
}

impl GroupTotals {
    /// Folds one tour's breakdown into the totals.
    pub fn record(&mut self, tour: &TourRecord, breakdown: &FinancialBreakdown) {
        self.tour_count += 1;
        self.base_price += breakdown.base_price;
        self.bonus += breakdown.bonus;
        self.holiday_allowance += breakdown.holiday_allowance;
        self.annual_leave += breakdown.annual_leave;
        self.gross += breakdown.gross;
        self.statutory_deduction += breakdown.statutory_deduction;
        self.tax += breakdown.tax;
        self.net += breakdown.net;

        if breakdown.is_taxed {
            self.taxable_income += breakdown.net;
            self.taxed_tours += 1;
        } else {
            self.untaxed_income += breakdown.net;
            self.untaxed_tours += 1;
        }

        match tour.payment_status {
            PaymentStatus::Paid => self.paid_amount += breakdown.net,
            PaymentStatus::Unpaid => self.unpaid_amount += breakdown.net,
        }
    }
}

/// Grand totals over the full filtered set, including tip sums per currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrandTotals {
    /// The folded breakdown totals.
    #[serde(flatten)]
    pub totals: GroupTotals,
    /// Sum of tips received in euros.
    pub tips_eur: Decimal,
    /// Sum of tips received in US dollars.
    pub tips_usd: Decimal,
}

impl GrandTotals {
    /// Folds one tour into the grand totals.
    pub fn record(&mut self, tour: &TourRecord, breakdown: &FinancialBreakdown) {
        self.totals.record(tour, breakdown);
        self.tips_eur += tour.tip_eur;
        self.tips_usd += tour.tip_usd;
    }
}

/// Folds every computed tour into the grand totals.
pub fn fold_grand_totals(computed: &[ComputedTour]) -> GrandTotals {
    let mut totals = GrandTotals::default();
    for entry in computed {
        totals.record(&entry.tour, &entry.breakdown);
    }
    totals
}
