//! Financing assumptions.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LTV_PERCENT: f64 = 75.0;
pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 4.5;
pub const DEFAULT_TERM_YEARS: u32 = 25;
pub const DEFAULT_PURCHASE_COSTS_PERCENT: f64 = 4.0;

/// Financing parameters used for every deal.
///
/// Replaced wholesale, never patched field by field. `term_years` and
/// `purchase_costs_percent` are carried but the cashflow estimate is
/// interest-only and does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingAssumptions {
    pub ltv_percent: f64,
    pub interest_rate_percent: f64,
    pub term_years: u32,
    pub purchase_costs_percent: f64,
}

impl Default for FinancingAssumptions {
    fn default() -> Self {
        Self {
            ltv_percent: DEFAULT_LTV_PERCENT,
            interest_rate_percent: DEFAULT_INTEREST_RATE_PERCENT,
            term_years: DEFAULT_TERM_YEARS,
            purchase_costs_percent: DEFAULT_PURCHASE_COSTS_PERCENT,
        }
    }
}
