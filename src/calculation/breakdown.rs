//! Per-tour financial breakdown calculation.
//!
//! This module implements the scenario-specific payroll formulas that turn a
//! tour record into a [`FinancialBreakdown`]. The function is total: dirty
//! input degrades to zero contributions and a warning, never an error.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::{BreakdownOutcome, CalculationWarning, FinancialBreakdown, Scenario, TourRecord};

use super::season::seasonal_bonus;

/// Derives the financial breakdown for one tour under the given policy.
///
/// The formula is selected by the tour's scenario code:
///
/// * **Standard** — gross is base + bonus + holiday allowance; the statutory
///   deduction applies to gross; tax applies to the post-deduction amount
///   plus the annual leave; annual leave is paid on top of gross.
/// * **Special deal** — annual leave is folded into gross; the deduction is
///   taken on gross minus annual leave; tax applies to the post-deduction
///   amount.
/// * **Untaxed** — computed with the standard formula, but the reported
///   deduction and tax are zero. `net` keeps the standard-formula value:
///   the withholding still reduces take-home pay even though the breakdown
///   displays none. This display-vs-computation split is intentional.
///
/// An unknown scenario code falls back to the standard formula and a missing
/// tour date to the non-Easter bonus rate; both fallbacks are recorded as
/// warnings in the returned [`BreakdownOutcome`].
pub fn calculate_breakdown(tour: &TourRecord, policy: &PayrollPolicy) -> BreakdownOutcome {
    let mut warnings = Vec::new();

    let scenario = match Scenario::from_code(tour.calculation_scenario) {
        Some(scenario) => scenario,
        None => {
            warnings.push(CalculationWarning::unknown_scenario(tour.calculation_scenario));
            Scenario::Standard
        }
    };

    if tour.tour_date.is_none() {
        warnings.push(CalculationWarning::missing_tour_date(&tour.tour_id));
    }

    let base_price = if tour.base_price < Decimal::ZERO {
        warnings.push(CalculationWarning::negative_amount(
            "base_price",
            &tour.base_price.to_string(),
        ));
        Decimal::ZERO
    } else {
        tour.base_price
    };

    let seasonal = seasonal_bonus(tour.tour_date, policy);
    let bonus = base_price * seasonal.rate;
    let holiday_allowance = base_price * policy.holiday_allowance_rate;
    let annual_leave = base_price * policy.annual_leave_rate;

    let (gross, statutory_deduction, tax, net) = match scenario {
        Scenario::SpecialDeal => {
            let gross = base_price + bonus + holiday_allowance + annual_leave;
            let deduction = (gross - annual_leave) * policy.statutory_deduction_rate;
            let tax = (gross - deduction) * policy.tax_rate;
            let net = gross - deduction - tax;
            (gross, deduction, tax, net)
        }
        Scenario::Standard | Scenario::Untaxed => {
            let gross = base_price + bonus + holiday_allowance;
            let deduction = gross * policy.statutory_deduction_rate;
            let tax = (gross - deduction) * policy.tax_rate + annual_leave * policy.tax_rate;
            let net = gross - deduction + annual_leave - tax;
            (gross, deduction, tax, net)
        }
    };

    // Untaxed settlements report no withholding; net keeps the internal value.
    let (reported_deduction, reported_tax) = if scenario == Scenario::Untaxed {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (statutory_deduction, tax)
    };

    BreakdownOutcome {
        breakdown: FinancialBreakdown {
            base_price,
            bonus,
            bonus_name: seasonal.name,
            holiday_allowance,
            annual_leave,
            gross,
            statutory_deduction: reported_deduction,
            tax: reported_tax,
            net,
            scenario,
            is_taxed: scenario.is_taxed(),
        },
        warnings,
    }
}
