//! DealDraft - the editable text form of a deal.
//!
//! Form fields arrive as raw text, one edit at a time. Each edit is a
//! discrete transition producing a new draft; parsing into a numeric
//! [`Deal`] happens only in [`DealDraft::build`].

use serde::{Deserialize, Serialize};

use super::Deal;
use crate::domain::foundation::{DealId, Timestamp, ValidationError};

/// Title given to deals saved without one.
pub const DEFAULT_DEAL_TITLE: &str = "New Deal";

/// A single field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftEdit {
    TitleChanged(String),
    AreaChanged(String),
    BedroomsChanged(String),
    SizeChanged(String),
    AskingPriceChanged(String),
    ExpectedRentChanged(String),
    ServiceChargeChanged(String),
    AdditionalCostsChanged(String),
}

/// In-progress deal entry, every field held as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealDraft {
    /// Id of the deal being edited; empty for a new listing.
    pub deal_id: DealId,
    pub title: String,
    pub area: String,
    pub bedrooms: String,
    pub size_sqft: String,
    pub asking_price: String,
    pub expected_rent: String,
    pub service_charge: String,
    pub additional_costs: String,
}

impl DealDraft {
    /// Creates an empty draft for a new listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft pre-filled from an existing deal, for editing.
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            deal_id: deal.id.clone(),
            title: deal.title.clone(),
            area: deal.area.clone(),
            bedrooms: deal.bedrooms.to_string(),
            size_sqft: deal.size_sqft.to_string(),
            asking_price: deal.asking_price.to_string(),
            expected_rent: deal.expected_rent_per_year.to_string(),
            service_charge: deal
                .service_charge_per_year
                .map(|v| v.to_string())
                .unwrap_or_default(),
            additional_costs: deal
                .additional_costs_per_year
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Applies one edit, returning the next draft state.
    pub fn apply(mut self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::TitleChanged(v) => self.title = v,
            DraftEdit::AreaChanged(v) => self.area = v,
            DraftEdit::BedroomsChanged(v) => self.bedrooms = v,
            DraftEdit::SizeChanged(v) => self.size_sqft = v,
            DraftEdit::AskingPriceChanged(v) => self.asking_price = v,
            DraftEdit::ExpectedRentChanged(v) => self.expected_rent = v,
            DraftEdit::ServiceChargeChanged(v) => self.service_charge = v,
            DraftEdit::AdditionalCostsChanged(v) => self.additional_costs = v,
        }
        self
    }

    /// Returns true if the required numeric fields all parse.
    pub fn is_complete(&self) -> bool {
        self.required_figures().is_ok()
    }

    /// Parses the draft into a deal created at `created_at`.
    ///
    /// Size, asking price and expected rent are required. Bedrooms fall back
    /// to 0 and unparsable optional costs are treated as absent. The id is
    /// carried over as-is, so a new listing stays unassigned until stored.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if a required field is blank
    /// - `InvalidFormat` if a required field is not a finite number
    pub fn build(&self, created_at: Timestamp) -> Result<Deal, ValidationError> {
        let (size_sqft, asking_price, expected_rent_per_year) = self.required_figures()?;

        let title = match self.title.trim() {
            "" => DEFAULT_DEAL_TITLE.to_string(),
            t => t.to_string(),
        };

        Ok(Deal {
            id: self.deal_id.clone(),
            title,
            area: self.area.trim().to_string(),
            bedrooms: self.bedrooms.trim().parse().unwrap_or(0),
            size_sqft,
            asking_price,
            expected_rent_per_year,
            service_charge_per_year: parse_optional(&self.service_charge),
            additional_costs_per_year: parse_optional(&self.additional_costs),
            created_at,
        })
    }

    fn required_figures(&self) -> Result<(f64, f64, f64), ValidationError> {
        Ok((
            parse_required("size_sqft", &self.size_sqft)?,
            parse_required("asking_price", &self.asking_price)?,
            parse_required("expected_rent", &self.expected_rent)?,
        ))
    }
}

fn parse_required(field: &str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::invalid_format(
            field,
            format!("not a number: '{}'", raw),
        )),
    }
}

fn parse_optional(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
