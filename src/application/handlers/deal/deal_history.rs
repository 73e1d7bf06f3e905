//! DealHistoryHandler - Every saved deal with its analysis.

use std::sync::Arc;

use super::analyze_deal::{analyze_against, AnalyzedDeal};
use crate::domain::deal::DealError;
use crate::ports::{AreaBenchmarkReader, AssumptionsRepository, DealRepository};

/// Handler producing the analysed deal history, newest first.
///
/// All deals are analysed against one assumptions snapshot taken at the
/// start of the call.
pub struct DealHistoryHandler {
    deals: Arc<dyn DealRepository>,
    benchmarks: Arc<dyn AreaBenchmarkReader>,
    assumptions: Arc<dyn AssumptionsRepository>,
}

impl DealHistoryHandler {
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

    pub async fn handle(&self) -> Result<Vec<AnalyzedDeal>, DealError> {
        let assumptions = self.assumptions.get().await?;
        let deals = self.deals.list().await?;

        let mut history = Vec::with_capacity(deals.len());
        for deal in deals {
            let breakdown = analyze_against(self.benchmarks.as_ref(), &deal, &assumptions).await?;
            history.push(AnalyzedDeal { deal, breakdown });
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAreaBenchmarks, InMemoryAssumptions, InMemoryDealRepository,
    };
    use crate::domain::analysis::Verdict;
    use crate::domain::foundation::{DealId, Timestamp};

    #[tokio::test]
    async fn history_pairs_each_deal_with_its_verdict() {
        let handler = DealHistoryHandler::new(
            Arc::new(InMemoryDealRepository::seeded(Timestamp::now())),
            Arc::new(InMemoryAreaBenchmarks::dubai()),
            Arc::new(InMemoryAssumptions::default()),
        );

        let history = handler.handle().await.unwrap();

        let verdicts: Vec<_> = history
            .iter()
            .map(|entry| (entry.deal.id.clone(), entry.analysis().verdict))
            .collect();
        assert_eq!(
            verdicts,
            vec![
                (DealId::new("1"), Verdict::Fair),
                (DealId::new("2"), Verdict::Overpriced),
            ]
        );
    }

    #[tokio::test]
    async fn empty_store_has_empty_history() {
        let handler = DealHistoryHandler::new(
            Arc::new(InMemoryDealRepository::new()),
            Arc::new(InMemoryAreaBenchmarks::dubai()),
            Arc::new(InMemoryAssumptions::default()),
        );

        assert!(handler.handle().await.unwrap().is_empty());
    }
}
