//! ListDealsHandler - Query handler for the saved deal list.

use std::sync::Arc;

use crate::domain::deal::{Deal, DealError};
use crate::ports::DealRepository;

/// Handler for listing every stored deal, newest first.
pub struct ListDealsHandler {
    repository: Arc<dyn DealRepository>,
}

impl ListDealsHandler {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Deal>, DealError> {
        Ok(self.repository.list().await?)
    }
}
