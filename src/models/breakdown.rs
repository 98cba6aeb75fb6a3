//! Financial breakdown models.
//!
//! This module contains the per-tour [`FinancialBreakdown`] produced by the
//! calculator, the resolved [`Scenario`] selector, and the warning types that
//! surface dirty-data fallbacks without failing the computation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The payroll formula selector attached to a tour's agency.
///
/// # Example
///
/// ```
/// use tour_engine::models::Scenario;
///
/// assert_eq!(Scenario::from_code(3), Some(Scenario::Untaxed));
/// assert_eq!(Scenario::from_code(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// The standard payroll formula.
    Standard,
    /// The special-deal formula: annual leave is folded into gross.
    SpecialDeal,
    /// Untaxed cash settlement: deduction and tax are reported as zero.
    Untaxed,
}

impl Scenario {
    /// Maps a raw scenario code to its formula, if the code is known.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Scenario::Standard),
            2 => Some(Scenario::SpecialDeal),
            3 => Some(Scenario::Untaxed),
            _ => None,
        }
    }

    /// Returns the canonical numeric code for this scenario.
    pub fn code(&self) -> i32 {
        match self {
            Scenario::Standard => 1,
            Scenario::SpecialDeal => 2,
            Scenario::Untaxed => 3,
        }
    }

    /// Returns true when income under this scenario is taxable.
    pub fn is_taxed(&self) -> bool {
        !matches!(self, Scenario::Untaxed)
    }
}

/// The full financial breakdown derived from one tour record.
///
/// All amounts are full precision; rounding to two decimal places happens
/// only in the [`presentation`](FinancialBreakdown::presentation) copy so
/// that sums over many tours never compound rounding error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    /// The parsed base tour fee.
    pub base_price: Decimal,
    /// Seasonal bonus amount.
    pub bonus: Decimal,
    /// Display label of the seasonal bonus, retained verbatim.
    pub bonus_name: String,
    /// Holiday allowance amount.
    pub holiday_allowance: Decimal,
    /// Annual leave compensation amount.
    pub annual_leave: Decimal,
    /// Pre-deduction total compensation.
    pub gross: Decimal,
    /// Reported statutory withholding; zero under the untaxed scenario.
    pub statutory_deduction: Decimal,
    /// Reported income tax; zero under the untaxed scenario.
    pub tax: Decimal,
    /// Take-home compensation.
    pub net: Decimal,
    /// The formula that produced this breakdown.
    pub scenario: Scenario,
    /// Whether the income counts as taxable.
    pub is_taxed: bool,
}

impl FinancialBreakdown {
    /// Returns a copy with every monetary field rounded to two decimal
    /// places using standard (midpoint away from zero) rounding.
    ///
    /// This is the only place rounding is applied; aggregation always folds
    /// the full-precision values.
    pub fn presentation(&self) -> Self {
        let round = |value: Decimal| {
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            base_price: round(self.base_price),
            bonus: round(self.bonus),
            bonus_name: self.bonus_name.clone(),
            holiday_allowance: round(self.holiday_allowance),
            annual_leave: round(self.annual_leave),
            gross: round(self.gross),
            statutory_deduction: round(self.statutory_deduction),
            tax: round(self.tax),
            net: round(self.net),
            scenario: self.scenario,
            is_taxed: self.is_taxed,
        }
    }
}

/// A data-quality warning produced while deriving a breakdown.
///
/// Warnings never abort the computation; they record that a fallback was
/// taken (unknown scenario code, missing date, coerced amount) so callers can
/// surface upstream data problems instead of silently absorbing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium").
    pub severity: String,
}

impl CalculationWarning {
    /// An unrecognized scenario code fell back to the standard formula.
    pub fn unknown_scenario(code: i32) -> Self {
        Self {
            code: "unknown_scenario".to_string(),
            message: format!("scenario code {} is not recognized, using the standard formula", code),
            severity: "medium".to_string(),
        }
    }

    /// A tour without a usable date was treated as outside the Easter period.
    pub fn missing_tour_date(tour_id: &str) -> Self {
        Self {
            code: "missing_tour_date".to_string(),
            message: format!(
                "tour '{}' has no usable date; excluded from date groupings and treated as outside the Easter period",
                tour_id
            ),
            severity: "medium".to_string(),
        }
    }

    /// A date field could not be parsed and was dropped.
    pub fn unparseable_date(raw: &str) -> Self {
        Self {
            code: "unparseable_date".to_string(),
            message: format!("tour date '{}' is not a valid date, record treated as undated", raw),
            severity: "medium".to_string(),
        }
    }

    /// A numeric field could not be parsed and was coerced to zero.
    pub fn unparseable_amount(field: &str, raw: &str) -> Self {
        Self {
            code: "unparseable_amount".to_string(),
            message: format!("field '{}' value '{}' is not numeric, treated as 0", field, raw),
            severity: "low".to_string(),
        }
    }

    /// A negative amount was coerced to zero.
    pub fn negative_amount(field: &str, raw: &str) -> Self {
        Self {
            code: "negative_amount".to_string(),
            message: format!("field '{}' value '{}' is negative, treated as 0", field, raw),
            severity: "low".to_string(),
        }
    }
}

/// A breakdown together with the warnings raised while deriving it.
///
/// The tagged shape lets callers distinguish a clean result from one that
/// involved fallbacks, without the computation ever failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownOutcome {
    /// The derived breakdown.
    pub breakdown: FinancialBreakdown,
    /// Warnings raised while deriving it; empty for clean input.
    pub warnings: Vec<CalculationWarning>,
}

impl BreakdownOutcome {
    /// Returns true when no fallback was taken.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
