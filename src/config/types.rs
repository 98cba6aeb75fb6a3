//! Payroll policy types.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from a YAML configuration file. Every rate the calculator
//! applies lives here rather than as a literal in computation code.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar months (1-indexed).
///
/// Used to approximate the Easter bonus period as a fixed month window.
/// The approximation is deliberate: the floating holiday moves year to year,
/// but the payroll rule in force uses a literal month range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MonthRange {
    /// First month of the range (1 = January).
    pub first: u32,
    /// Last month of the range, inclusive.
    pub last: u32,
}

impl MonthRange {
    /// Returns true when the given 1-indexed month falls inside the range.
    pub fn contains(&self, month: u32) -> bool {
        month >= self.first && month <= self.last
    }
}

/// The complete payroll policy applied to every tour.
///
/// A policy bundles the seasonal bonus rates and labels, the allowance and
/// leave accrual rates, the statutory deduction and tax percentages, and the
/// fixed USD to EUR conversion used to rank tip groups. [`Default`] carries
/// the statutory values currently in force, so the engine works without a
/// configuration directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayrollPolicy {
    /// Bonus rate applied during the Easter period.
    pub easter_bonus_rate: Decimal,
    /// Bonus rate applied outside the Easter period.
    pub christmas_bonus_rate: Decimal,
    /// Display label for the Easter-period bonus, retained verbatim.
    pub easter_bonus_name: String,
    /// Display label for the bonus outside the Easter period.
    pub christmas_bonus_name: String,
    /// Holiday allowance rate applied to the base price.
    pub holiday_allowance_rate: Decimal,
    /// Annual leave compensation rate applied to the base price.
    pub annual_leave_rate: Decimal,
    /// Statutory social-insurance withholding rate.
    pub statutory_deduction_rate: Decimal,
    /// Income tax rate applied after the statutory deduction.
    pub tax_rate: Decimal,
    /// Fixed USD to EUR conversion rate, used for tip ranking only.
    pub usd_to_eur_rate: Decimal,
    /// Calendar months treated as the Easter period.
    pub easter_months: MonthRange,
}

impl PayrollPolicy {
    /// Validates that every rate is usable.
    ///
    /// Percentage rates must lie in `[0, 1]`, the conversion rate must be
    /// positive, and the Easter month range must stay within the calendar.
    pub fn validate(&self) -> EngineResult<()> {
        let percentage_fields = [
            ("easter_bonus_rate", self.easter_bonus_rate),
            ("christmas_bonus_rate", self.christmas_bonus_rate),
            ("holiday_allowance_rate", self.holiday_allowance_rate),
            ("annual_leave_rate", self.annual_leave_rate),
            ("statutory_deduction_rate", self.statutory_deduction_rate),
            ("tax_rate", self.tax_rate),
        ];

        for (field, rate) in percentage_fields {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("must be between 0 and 1, got {}", rate),
                });
            }
        }

        if self.usd_to_eur_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "usd_to_eur_rate".to_string(),
                message: format!("must be positive, got {}", self.usd_to_eur_rate),
            });
        }

        let months = &self.easter_months;
        if months.first < 1 || months.last > 12 || months.first > months.last {
            return Err(EngineError::InvalidPolicy {
                field: "easter_months".to_string(),
                message: format!(
                    "must be an inclusive range within 1..=12, got {}..={}",
                    months.first, months.last
                ),
            });
        }

        Ok(())
    }
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            easter_bonus_rate: Decimal::new(1538, 4),
            christmas_bonus_rate: Decimal::new(125, 3),
            easter_bonus_name: "Easter Bonus".to_string(),
            christmas_bonus_name: "Christmas Bonus".to_string(),
            holiday_allowance_rate: Decimal::new(8, 2),
            annual_leave_rate: Decimal::new(8, 2),
            statutory_deduction_rate: Decimal::new(1337, 4),
            tax_rate: Decimal::new(5, 2),
            usd_to_eur_rate: Decimal::new(92, 2),
            easter_months: MonthRange { first: 1, last: 4 },
        }
    }
}
