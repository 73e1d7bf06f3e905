//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier for a deal.
///
/// Ids are free text: callers may supply their own (imported listings keep
/// their source id) or leave it empty and let the store assign one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(String);

impl DealId {
    /// Creates a DealId from any string, including the empty "unassigned" id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique DealId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns true if no id has been assigned (the empty default).
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DealId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_assigned() {
        let a = DealId::generate();
        let b = DealId::generate();
        assert_ne!(a, b);
        assert!(!a.is_unassigned());
    }

    #[test]
    fn empty_id_is_unassigned() {
        assert!(DealId::default().is_unassigned());
        assert!(DealId::new("").is_unassigned());
    }

    #[test]
    fn deal_id_displays_inner_value() {
        assert_eq!(DealId::new("42").to_string(), "42");
    }

    #[test]
    fn deal_id_parses_from_str() {
        let id: DealId = "listing-7".parse().unwrap();
        assert_eq!(id.as_str(), "listing-7");
    }

    #[test]
    fn deal_id_serializes_transparently() {
        let json = serde_json::to_string(&DealId::new("1")).unwrap();
        assert_eq!(json, "\"1\"");
    }
}
