//! Initial financing assumptions configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::financing::{
    FinancingAssumptions, DEFAULT_INTEREST_RATE_PERCENT, DEFAULT_LTV_PERCENT,
    DEFAULT_PURCHASE_COSTS_PERCENT, DEFAULT_TERM_YEARS,
};

/// Assumptions the store starts with
#[derive(Debug, Clone, Deserialize)]
pub struct FinancingConfig {
    #[serde(default = "default_ltv_percent")]
    pub ltv_percent: f64,

    #[serde(default = "default_interest_rate_percent")]
    pub interest_rate_percent: f64,

    #[serde(default = "default_term_years")]
    pub term_years: u32,

    #[serde(default = "default_purchase_costs_percent")]
    pub purchase_costs_percent: f64,
}

impl FinancingConfig {
    /// The configured values as domain assumptions
    pub fn assumptions(&self) -> FinancingAssumptions {
        FinancingAssumptions {
            ltv_percent: self.ltv_percent,
            interest_rate_percent: self.interest_rate_percent,
            term_years: self.term_years,
            purchase_costs_percent: self.purchase_costs_percent,
        }
    }

    /// Validate financing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&self.ltv_percent) {
            return Err(ValidationError::InvalidLtv);
        }
        if !self.interest_rate_percent.is_finite() || self.interest_rate_percent < 0.0 {
            return Err(ValidationError::InvalidInterestRate);
        }
        if self.term_years == 0 {
            return Err(ValidationError::InvalidTerm);
        }
        if !self.purchase_costs_percent.is_finite() || self.purchase_costs_percent < 0.0 {
            return Err(ValidationError::InvalidPurchaseCosts);
        }
        Ok(())
    }
}

impl Default for FinancingConfig {
    fn default() -> Self {
        Self {
            ltv_percent: default_ltv_percent(),
            interest_rate_percent: default_interest_rate_percent(),
            term_years: default_term_years(),
            purchase_costs_percent: default_purchase_costs_percent(),
        }
    }
}

fn default_ltv_percent() -> f64 {
    DEFAULT_LTV_PERCENT
}

fn default_interest_rate_percent() -> f64 {
    DEFAULT_INTEREST_RATE_PERCENT
}

fn default_term_years() -> u32 {
    DEFAULT_TERM_YEARS
}

fn default_purchase_costs_percent() -> f64 {
    DEFAULT_PURCHASE_COSTS_PERCENT
}
