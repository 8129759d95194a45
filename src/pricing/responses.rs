//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::models::EstimatedCost;

/// Display currency for every estimate.
pub const CURRENCY: &str = "KES";

/// Response for a cost estimate.
#[derive(Debug, Serialize)]
pub struct EstimateCostResponse {
    pub estimated_cost: EstimatedCost,
    pub currency: String,
    /// Pre-formatted display string, e.g. "Ksh 63,000".
    pub formatted: String,
    pub strategy: &'static str,
}

impl EstimateCostResponse {
    pub fn new(estimated_cost: EstimatedCost, strategy: &'static str) -> Self {
        Self {
            estimated_cost,
            currency: CURRENCY.to_string(),
            formatted: format_ksh(estimated_cost),
            strategy,
        }
    }
}

/// One factor table entry for the factors endpoint.
#[derive(Debug, Serialize)]
pub struct FactorResponse {
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub weight: Decimal,
}

/// The immutable formula weight tables, for audit/help copy in the shell.
#[derive(Debug, Serialize)]
pub struct PricingFactorsResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_cost_per_person_per_night: Decimal,
    pub countries: Vec<FactorResponse>,
    pub age_groups: Vec<FactorResponse>,
    pub activities: Vec<FactorResponse>,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}

/// Format a shilling amount with thousands separators, e.g. `Ksh 63,000`.
pub fn format_ksh(amount: EstimatedCost) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("Ksh {}{}", sign, grouped)
}
