//! GetDealHandler - Query handler for a single deal.

use std::sync::Arc;

use crate::domain::deal::{Deal, DealError};
use crate::domain::foundation::DealId;
use crate::ports::DealRepository;

/// Query to get a deal by ID.
#[derive(Debug, Clone)]
pub struct GetDealQuery {
    pub deal_id: DealId,
}

/// Handler for retrieving a deal. Absence is `Ok(None)`.
pub struct GetDealHandler {
    repository: Arc<dyn DealRepository>,
}

impl GetDealHandler {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDealQuery) -> Result<Option<Deal>, DealError> {
        Ok(self.repository.find_by_id(&query.deal_id).await?)
    }
}
