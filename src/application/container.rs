//! AppContainer - Composition root wiring stores into handlers.
//!
//! One store of each kind is created here and shared by handle with every
//! handler that needs it. Nothing in the crate holds ambient global state.

use std::sync::Arc;

use super::handlers::{
    AnalyzeDealHandler, DealHistoryHandler, DeleteDealHandler, GetAreaBenchmarkHandler,
    GetAssumptionsHandler, GetDealHandler, ListAreaBenchmarksHandler, ListDealsHandler,
    PreviewDraftHandler, SaveAssumptionsHandler, SaveDealHandler,
};
use crate::adapters::memory::{InMemoryAreaBenchmarks, InMemoryAssumptions, InMemoryDealRepository};
use crate::config::AppConfig;
use crate::domain::foundation::Timestamp;
use crate::ports::{AreaBenchmarkReader, AssumptionsRepository, DealRepository};

/// Every handler of the application, built over one set of stores.
pub struct AppContainer {
    pub list_deals: ListDealsHandler,
    pub get_deal: GetDealHandler,
    pub save_deal: SaveDealHandler,
    pub delete_deal: DeleteDealHandler,
    pub analyze_deal: AnalyzeDealHandler,
    pub preview_draft: PreviewDraftHandler,
    pub deal_history: DealHistoryHandler,
    pub get_assumptions: GetAssumptionsHandler,
    pub save_assumptions: SaveAssumptionsHandler,
    pub list_area_benchmarks: ListAreaBenchmarksHandler,
    pub get_area_benchmark: GetAreaBenchmarkHandler,
}

impl AppContainer {
    /// Builds the handlers over the given stores.
    pub fn new(
        deals: Arc<dyn DealRepository>,
        benchmarks: Arc<dyn AreaBenchmarkReader>,
        assumptions: Arc<dyn AssumptionsRepository>,
    ) -> Self {
        Self {
            list_deals: ListDealsHandler::new(deals.clone()),
            get_deal: GetDealHandler::new(deals.clone()),
            save_deal: SaveDealHandler::new(deals.clone()),
            delete_deal: DeleteDealHandler::new(deals.clone()),
            analyze_deal: AnalyzeDealHandler::new(
                deals.clone(),
                benchmarks.clone(),
                assumptions.clone(),
            ),
            preview_draft: PreviewDraftHandler::new(benchmarks.clone(), assumptions.clone()),
            deal_history: DealHistoryHandler::new(deals, benchmarks.clone(), assumptions.clone()),
            get_assumptions: GetAssumptionsHandler::new(assumptions.clone()),
            save_assumptions: SaveAssumptionsHandler::new(assumptions),
            list_area_benchmarks: ListAreaBenchmarksHandler::new(benchmarks.clone()),
            get_area_benchmark: GetAreaBenchmarkHandler::new(benchmarks),
        }
    }

    /// Wires the in-memory stores according to `config`.
    pub fn in_memory(config: &AppConfig) -> Self {
        let deals = if config.seed.sample_deals {
            InMemoryDealRepository::seeded(Timestamp::now())
        } else {
            InMemoryDealRepository::new()
        };

        Self::new(
            Arc::new(deals),
            Arc::new(InMemoryAreaBenchmarks::dubai()),
            Arc::new(InMemoryAssumptions::new(config.financing.assumptions())),
        )
    }
}
