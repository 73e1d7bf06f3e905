//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod container;
pub mod handlers;

pub use container::AppContainer;
pub use handlers::{
    AnalyzeDealHandler, AnalyzeDealQuery, AnalyzedDeal, DealHistoryHandler, DeleteDealCommand,
    DeleteDealHandler, GetAreaBenchmarkHandler, GetAreaBenchmarkQuery, GetAssumptionsHandler,
    GetDealHandler, GetDealQuery, ListAreaBenchmarksHandler, ListDealsHandler,
    PreviewDraftHandler, PreviewDraftQuery, SaveAssumptionsCommand, SaveAssumptionsHandler,
    SaveDealCommand, SaveDealHandler,
};
