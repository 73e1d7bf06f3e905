//! DeleteDealHandler - Command handler for removing a deal.

use std::sync::Arc;

use tracing::debug;

use crate::domain::deal::DealError;
use crate::domain::foundation::DealId;
use crate::ports::DealRepository;

/// Command to delete a deal.
#[derive(Debug, Clone)]
pub struct DeleteDealCommand {
    pub deal_id: DealId,
}

/// Handler for deleting deals. Unknown ids are ignored.
pub struct DeleteDealHandler {
    repository: Arc<dyn DealRepository>,
}

impl DeleteDealHandler {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDealCommand) -> Result<(), DealError> {
        self.repository.delete(&cmd.deal_id).await?;

        debug!(deal_id = %cmd.deal_id, "Deleted deal");

        Ok(())
    }
}
