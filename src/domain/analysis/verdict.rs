//! Verdict - price fairness relative to an area benchmark.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this price ratio a deal is undervalued.
pub const UNDERVALUED_BELOW_RATIO: f64 = 0.9;

/// Above this price ratio a deal is overpriced.
pub const OVERPRICED_ABOVE_RATIO: f64 = 1.1;

/// Categorical judgment of the asking price against the area average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Undervalued,
    /// Also the neutral default when no benchmark applies.
    #[default]
    Fair,
    Overpriced,
}

impl Verdict {
    /// Classifies a deal's price-per-sqft ratio to the area average.
    ///
    /// Both boundaries are inclusive on the `Fair` side.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < UNDERVALUED_BELOW_RATIO {
            Verdict::Undervalued
        } else if ratio <= OVERPRICED_ABOVE_RATIO {
            Verdict::Fair
        } else {
            Verdict::Overpriced
        }
    }

    /// Returns the display label for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Undervalued => "Undervalued",
            Verdict::Fair => "Fair",
            Verdict::Overpriced => "Overpriced",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_boundaries_are_fair() {
        assert_eq!(Verdict::from_ratio(0.9), Verdict::Fair);
        assert_eq!(Verdict::from_ratio(1.1), Verdict::Fair);
        assert_eq!(Verdict::from_ratio(1.0), Verdict::Fair);
    }

    #[test]
    fn ratio_outside_band_is_classified() {
        assert_eq!(Verdict::from_ratio(0.8999), Verdict::Undervalued);
        assert_eq!(Verdict::from_ratio(0.0), Verdict::Undervalued);
        assert_eq!(Verdict::from_ratio(1.1001), Verdict::Overpriced);
    }

    #[test]
    fn verdict_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::Undervalued).unwrap(),
            "\"UNDERVALUED\""
        );
        assert_eq!(serde_json::to_string(&Verdict::Fair).unwrap(), "\"FAIR\"");
        assert_eq!(
            serde_json::to_string(&Verdict::Overpriced).unwrap(),
            "\"OVERPRICED\""
        );
    }

    #[test]
    fn verdict_displays_label() {
        assert_eq!(Verdict::Overpriced.to_string(), "Overpriced");
    }
}
