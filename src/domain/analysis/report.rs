//! Analysis results.

use serde::{Deserialize, Serialize};

use super::Verdict;

/// Computed metrics and verdict for one deal.
///
/// Fully determined by the deal, benchmark and assumptions it was computed
/// from. Not persisted by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DealAnalysis {
    pub price_per_sqft: f64,
    pub gross_yield_percent: f64,
    pub net_yield_percent: f64,
    pub monthly_cashflow_estimate: f64,
    pub verdict: Verdict,
}

/// Every intermediate figure of an analysis run alongside the headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBreakdown {
    pub price_per_sqft: f64,
    pub gross_yield_percent: f64,
    pub total_annual_costs: f64,
    /// May be negative when costs exceed rent.
    pub net_rent_per_year: f64,
    pub net_yield_percent: f64,
    pub loan_amount: f64,
    pub yearly_interest: f64,
    pub monthly_interest: f64,
    pub monthly_net_rent: f64,
    pub monthly_cashflow_estimate: f64,
    /// Price-per-sqft over the area average. `None` when no usable benchmark
    /// was available and the verdict is the neutral default.
    pub benchmark_ratio: Option<f64>,
    pub verdict: Verdict,
}

impl AnalysisBreakdown {
    /// The headline metrics.
    pub fn analysis(&self) -> DealAnalysis {
        DealAnalysis {
            price_per_sqft: self.price_per_sqft,
            gross_yield_percent: self.gross_yield_percent,
            net_yield_percent: self.net_yield_percent,
            monthly_cashflow_estimate: self.monthly_cashflow_estimate,
            verdict: self.verdict,
        }
    }

    /// Returns true if the verdict came from an actual benchmark comparison.
    pub fn is_benchmarked(&self) -> bool {
        self.benchmark_ratio.is_some()
    }
}
