//! Area benchmark statistics.

use serde::{Deserialize, Serialize};

/// Aggregate market statistics for a named area.
///
/// Static reference data: looked up read-only, never modified by analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBenchmark {
    pub area: String,
    pub avg_price_per_sqft: f64,
    /// Not used by the verdict yet; kept for rent-side valuation.
    pub avg_rent_per_sqft_per_year: f64,
}

impl AreaBenchmark {
    pub fn new(
        area: impl Into<String>,
        avg_price_per_sqft: f64,
        avg_rent_per_sqft_per_year: f64,
    ) -> Self {
        Self {
            area: area.into(),
            avg_price_per_sqft,
            avg_rent_per_sqft_per_year,
        }
    }

    /// Case-insensitive exact match on the area name.
    pub fn matches(&self, area: &str) -> bool {
        self.area.to_lowercase() == area.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignores_case() {
        let marina = AreaBenchmark::new("Dubai Marina", 1800.0, 130.0);
        assert!(marina.matches("dubai marina"));
        assert!(marina.matches("DUBAI MARINA"));
        assert!(marina.matches("Dubai Marina"));
    }

    #[test]
    fn matches_requires_whole_name() {
        let marina = AreaBenchmark::new("Dubai Marina", 1800.0, 130.0);
        assert!(!marina.matches("Marina"));
        assert!(!marina.matches("Dubai Marina Walk"));
        assert!(!marina.matches(""));
    }
}
