//! Deal record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DealId, Timestamp};

/// A candidate property to evaluate.
///
/// Plain data: the analyzer never mutates it, and no validation is applied
/// beyond the numeric guards inside the analyzer. Costs that are `None` count
/// as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Store-assigned or caller-supplied id. Empty until first stored.
    pub id: DealId,

    /// Display label, may be empty.
    pub title: String,

    /// Name of the benchmark area, matched case-insensitively.
    pub area: String,

    pub bedrooms: u32,

    /// Floor area; zero or negative means "unknown".
    pub size_sqft: f64,

    pub asking_price: f64,

    /// Projected gross annual rent.
    pub expected_rent_per_year: f64,

    pub service_charge_per_year: Option<f64>,

    pub additional_costs_per_year: Option<f64>,

    /// Set once when the deal is created.
    #[serde(rename = "created_at_millis")]
    pub created_at: Timestamp,
}

impl Deal {
    /// Sum of the recurring annual costs, absent costs counting as zero.
    pub fn total_annual_costs(&self) -> f64 {
        self.service_charge_per_year.unwrap_or(0.0) + self.additional_costs_per_year.unwrap_or(0.0)
    }

    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: DealId) -> Self {
        self.id = id;
        self
    }
}
