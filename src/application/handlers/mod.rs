//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assumptions;
pub mod benchmark;
pub mod deal;

pub use assumptions::{GetAssumptionsHandler, SaveAssumptionsCommand, SaveAssumptionsHandler};
pub use benchmark::{GetAreaBenchmarkHandler, GetAreaBenchmarkQuery, ListAreaBenchmarksHandler};
pub use deal::{
    AnalyzeDealHandler, AnalyzeDealQuery, AnalyzedDeal, DealHistoryHandler, DeleteDealCommand,
    DeleteDealHandler, GetDealHandler, GetDealQuery, ListDealsHandler, PreviewDraftHandler,
    PreviewDraftQuery, SaveDealCommand, SaveDealHandler,
};
