//! PreviewDraftHandler - Live analysis of a deal still being edited.

use std::sync::Arc;

use super::analyze_deal::analyze_against;
use crate::domain::analysis::AnalysisBreakdown;
use crate::domain::deal::{DealDraft, DealError};
use crate::domain::foundation::Timestamp;
use crate::ports::{AreaBenchmarkReader, AssumptionsRepository};

/// Query to preview the analysis of a draft.
#[derive(Debug, Clone)]
pub struct PreviewDraftQuery {
    pub draft: DealDraft,
}

/// Handler that re-runs the analysis after each draft edit.
pub struct PreviewDraftHandler {
    benchmarks: Arc<dyn AreaBenchmarkReader>,
    assumptions: Arc<dyn AssumptionsRepository>,
}

impl PreviewDraftHandler {
    pub fn new(
        benchmarks: Arc<dyn AreaBenchmarkReader>,
        assumptions: Arc<dyn AssumptionsRepository>,
    ) -> Self {
        Self {
            benchmarks,
            assumptions,
        }
    }

    /// Returns `None` while the draft's required figures do not parse.
    pub async fn handle(
        &self,
        query: PreviewDraftQuery,
    ) -> Result<Option<AnalysisBreakdown>, DealError> {
        let Ok(deal) = query.draft.build(Timestamp::now()) else {
            return Ok(None);
        };

        let assumptions = self.assumptions.get().await?;
        let breakdown = analyze_against(self.benchmarks.as_ref(), &deal, &assumptions).await?;

        Ok(Some(breakdown))
    }
}
