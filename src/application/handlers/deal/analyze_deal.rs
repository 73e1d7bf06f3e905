//! AnalyzeDealHandler - Query handler for analysing a stored deal.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::analysis::{AnalysisBreakdown, DealAnalysis, DealAnalyzer};
use crate::domain::deal::{Deal, DealError};
use crate::domain::financing::FinancingAssumptions;
use crate::domain::foundation::{DealId, DomainError};
use crate::ports::{AreaBenchmarkReader, AssumptionsRepository, DealRepository};

/// Query to analyse a deal by ID.
#[derive(Debug, Clone)]
pub struct AnalyzeDealQuery {
    pub deal_id: DealId,
}

/// A deal together with its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedDeal {
    pub deal: Deal,
    pub breakdown: AnalysisBreakdown,
}

impl AnalyzedDeal {
    /// The headline metrics.
    pub fn analysis(&self) -> DealAnalysis {
        self.breakdown.analysis()
    }
}

/// Handler for analysing stored deals.
pub struct AnalyzeDealHandler {
    deals: Arc<dyn DealRepository>,
    benchmarks: Arc<dyn AreaBenchmarkReader>,
    assumptions: Arc<dyn AssumptionsRepository>,
}

impl AnalyzeDealHandler {
    pub fn new(
        deals: Arc<dyn DealRepository>,
        benchmarks: Arc<dyn AreaBenchmarkReader>,
        assumptions: Arc<dyn AssumptionsRepository>,
    ) -> Self {
        Self {
            deals,
            benchmarks,
            assumptions,
        }
    }

    pub async fn handle(&self, query: AnalyzeDealQuery) -> Result<AnalyzedDeal, DealError> {
        let deal = self
            .deals
            .find_by_id(&query.deal_id)
            .await?
            .ok_or_else(|| DealError::not_found(query.deal_id.clone()))?;

        let assumptions = self.assumptions.get().await?;
        let breakdown = analyze_against(self.benchmarks.as_ref(), &deal, &assumptions).await?;

        Ok(AnalyzedDeal { deal, breakdown })
    }
}

/// Looks up the deal's area benchmark and runs the analyzer.
pub(crate) async fn analyze_against(
    benchmarks: &dyn AreaBenchmarkReader,
    deal: &Deal,
    assumptions: &FinancingAssumptions,
) -> Result<AnalysisBreakdown, DomainError> {
    let benchmark = benchmarks.get_by_area(&deal.area).await?;
    let breakdown = DealAnalyzer::breakdown(deal, benchmark.as_ref(), assumptions);

    debug!(
        deal_id = %deal.id,
        area = %deal.area,
        benchmarked = breakdown.is_benchmarked(),
        verdict = %breakdown.verdict,
        "Analysed deal"
    );

    Ok(breakdown)
}
