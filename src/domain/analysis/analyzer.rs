//! Deal Analyzer - yield, cashflow and verdict for a single deal.

use super::{AnalysisBreakdown, DealAnalysis, Verdict};
use crate::domain::deal::Deal;
use crate::domain::financing::FinancingAssumptions;
use crate::domain::market::AreaBenchmark;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Stateless calculator for deal metrics.
///
/// Total over all finite inputs: degenerate size or price produce zero
/// metrics instead of infinities or NaN, and nothing is ever rejected.
/// Sanitising input is the caller's job.
pub struct DealAnalyzer;

impl DealAnalyzer {
    /// Computes the headline metrics for a deal.
    ///
    /// `benchmark` is the area's statistics if known. Assumptions must be
    /// supplied by the caller; no defaulting happens here.
    pub fn analyze(
        deal: &Deal,
        benchmark: Option<&AreaBenchmark>,
        assumptions: &FinancingAssumptions,
    ) -> DealAnalysis {
        Self::breakdown(deal, benchmark, assumptions).analysis()
    }

    /// Computes the metrics together with every intermediate figure.
    ///
    /// The cashflow is an interest-only proxy: principal repayment, the loan
    /// term and purchase costs are not part of it.
    pub fn breakdown(
        deal: &Deal,
        benchmark: Option<&AreaBenchmark>,
        assumptions: &FinancingAssumptions,
    ) -> AnalysisBreakdown {
        let price_per_sqft = if deal.size_sqft > 0.0 {
            deal.asking_price / deal.size_sqft
        } else {
            0.0
        };

        let gross_yield_percent = percent_of_price(deal.expected_rent_per_year, deal.asking_price);

        let total_annual_costs = deal.total_annual_costs();
        let net_rent_per_year = deal.expected_rent_per_year - total_annual_costs;
        let net_yield_percent = percent_of_price(net_rent_per_year, deal.asking_price);

        let loan_amount = deal.asking_price * (assumptions.ltv_percent / 100.0);
        let yearly_interest = loan_amount * (assumptions.interest_rate_percent / 100.0);
        let monthly_interest = yearly_interest / MONTHS_PER_YEAR;
        let monthly_net_rent = net_rent_per_year / MONTHS_PER_YEAR;
        let monthly_cashflow_estimate = monthly_net_rent - monthly_interest;

        let benchmark_ratio = benchmark
            .filter(|b| b.avg_price_per_sqft > 0.0)
            .map(|b| price_per_sqft / b.avg_price_per_sqft);
        let verdict = benchmark_ratio.map_or(Verdict::Fair, Verdict::from_ratio);

        AnalysisBreakdown {
            price_per_sqft,
            gross_yield_percent,
            total_annual_costs,
            net_rent_per_year,
            net_yield_percent,
            loan_amount,
            yearly_interest,
            monthly_interest,
            monthly_net_rent,
            monthly_cashflow_estimate,
            benchmark_ratio,
            verdict,
        }
    }
}

fn percent_of_price(amount: f64, asking_price: f64) -> f64 {
    if asking_price > 0.0 {
        (amount / asking_price) * 100.0
    } else {
        0.0
    }
}
