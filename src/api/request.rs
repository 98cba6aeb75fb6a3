//! Request types for the HTTP API.
//!
//! Tour records arrive from upstream form storage and are dirty by nature:
//! amounts may be numbers or strings, dates may be malformed, names may be
//! missing. The request layer coerces every such field into the clean
//! domain [`TourRecord`], collecting a warning per fallback so data-quality
//! problems surface in the response instead of vanishing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    CalculationWarning, MonthKey, PaymentStatus, ReportFilter, TourRecord,
};

/// A tour record as submitted by the caller, before coercion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourRecordRequest {
    /// Unique identifier for the tour.
    pub tour_id: String,
    /// Tour date as an ISO string; null or malformed values are tolerated.
    #[serde(default)]
    pub tour_date: Option<Value>,
    /// Base tour fee; accepts a number, a numeric string, or null.
    #[serde(default)]
    pub base_price: Option<Value>,
    /// Raw payroll formula selector; missing values resolve to code 0.
    #[serde(default)]
    pub calculation_scenario: i32,
    /// Identifier of the selling agency.
    #[serde(default)]
    pub agency_id: Option<String>,
    /// Display name of the selling agency.
    #[serde(default)]
    pub agency_name: Option<String>,
    /// Name of the cruise ship.
    #[serde(default)]
    pub ship_name: Option<String>,
    /// Name of the tour type.
    #[serde(default)]
    pub tour_type_name: Option<String>,
    /// Settlement state as free text; anything but "Paid" counts as unpaid.
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Tip received in euros; accepts a number, a numeric string, or null.
    #[serde(default)]
    pub tip_eur: Option<Value>,
    /// Tip received in US dollars; same coercion as `tip_eur`.
    #[serde(default)]
    pub tip_usd: Option<Value>,
}

impl TourRecordRequest {
    /// Coerces the submitted record into the domain model.
    ///
    /// Every fallback taken (unparseable amount or date, negative amount)
    /// is returned alongside the record; missing descriptive names become
    /// "Unknown" without a warning, matching upstream display behavior.
    pub fn into_record(self) -> (TourRecord, Vec<CalculationWarning>) {
        let mut warnings = Vec::new();

        let tour_date = parse_date(self.tour_date, &mut warnings);
        let base_price = parse_amount("base_price", self.base_price, &mut warnings);
        let tip_eur = parse_amount("tip_eur", self.tip_eur, &mut warnings);
        let tip_usd = parse_amount("tip_usd", self.tip_usd, &mut warnings);

        let record = TourRecord {
            tour_id: self.tour_id,
            tour_date,
            base_price,
            calculation_scenario: self.calculation_scenario,
            agency_id: self.agency_id.unwrap_or_else(|| "Unknown".to_string()),
            agency_name: self.agency_name.unwrap_or_else(|| "Unknown".to_string()),
            ship_name: self.ship_name.unwrap_or_else(|| "Unknown".to_string()),
            tour_type_name: self.tour_type_name.unwrap_or_else(|| "Unknown".to_string()),
            payment_status: PaymentStatus::from(self.payment_status.unwrap_or_default()),
            tip_eur,
            tip_usd,
        };

        (record, warnings)
    }
}

/// Coerces a submitted amount into a non-negative decimal.
fn parse_amount(field: &str, value: Option<Value>, warnings: &mut Vec<CalculationWarning>) -> Decimal {
    let parsed = match value {
        None | Some(Value::Null) => Decimal::ZERO,
        Some(Value::Number(number)) => {
            let raw = number.to_string();
            match Decimal::from_str_exact(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
                Ok(amount) => amount,
                Err(_) => {
                    warnings.push(CalculationWarning::unparseable_amount(field, &raw));
                    Decimal::ZERO
                }
            }
        }
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Decimal::ZERO
            } else {
                match Decimal::from_str_exact(trimmed) {
                    Ok(amount) => amount,
                    Err(_) => {
                        warnings.push(CalculationWarning::unparseable_amount(field, &raw));
                        Decimal::ZERO
                    }
                }
            }
        }
        Some(other) => {
            warnings.push(CalculationWarning::unparseable_amount(field, &other.to_string()));
            Decimal::ZERO
        }
    };

    if parsed < Decimal::ZERO {
        warnings.push(CalculationWarning::negative_amount(field, &parsed.to_string()));
        return Decimal::ZERO;
    }
    parsed
}

/// Coerces a submitted date into `Option<NaiveDate>`.
///
/// Null and absent values pass through silently (the calculator reports
/// missing dates); a present but malformed value is warned about here, at
/// the boundary that saw the raw text.
fn parse_date(value: Option<Value>, warnings: &mut Vec<CalculationWarning>) -> Option<NaiveDate> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warnings.push(CalculationWarning::unparseable_date(&raw));
                None
            }
        },
        Some(other) => {
            warnings.push(CalculationWarning::unparseable_date(&other.to_string()));
            None
        }
    }
}

/// Request body for the `/reports` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The tour snapshot to aggregate.
    pub tours: Vec<TourRecordRequest>,
    /// Optional date-range and agency filter, applied before aggregation.
    #[serde(default)]
    pub filter: Option<ReportFilter>,
}

/// Request body for the `/payment-status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidStatusRequest {
    /// The tour snapshot to update.
    pub tours: Vec<TourRecordRequest>,
    /// The month whose tours should be updated.
    pub month: MonthKey,
    /// The agency whose tours should be updated.
    pub agency_id: String,
    /// The settlement state to apply.
    pub is_paid: bool,
}
