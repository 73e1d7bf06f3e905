//! Deal command and query handlers.

mod analyze_deal;
mod deal_history;
mod delete_deal;
mod get_deal;
mod list_deals;
mod preview_draft;
mod save_deal;

pub use analyze_deal::{AnalyzeDealHandler, AnalyzeDealQuery, AnalyzedDeal};
pub use deal_history::DealHistoryHandler;
pub use delete_deal::{DeleteDealCommand, DeleteDealHandler};
pub use get_deal::{GetDealHandler, GetDealQuery};
pub use list_deals::ListDealsHandler;
pub use preview_draft::{PreviewDraftHandler, PreviewDraftQuery};
pub use save_deal::{SaveDealCommand, SaveDealHandler};
