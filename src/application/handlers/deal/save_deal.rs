//! SaveDealHandler - Command handler for inserting or replacing a deal.

use std::sync::Arc;

use tracing::debug;

use crate::domain::deal::{Deal, DealDraft, DealError};
use crate::domain::foundation::{DealId, Timestamp};
use crate::ports::DealRepository;

/// Command to save a deal.
#[derive(Debug, Clone)]
pub struct SaveDealCommand {
    pub deal: Deal,
}

impl SaveDealCommand {
    /// Builds the command from an edited draft.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a required draft field does not parse
    pub fn from_draft(draft: &DealDraft, created_at: Timestamp) -> Result<Self, DealError> {
        Ok(Self {
            deal: draft.build(created_at)?,
        })
    }
}

/// Handler for saving deals.
pub struct SaveDealHandler {
    repository: Arc<dyn DealRepository>,
}

impl SaveDealHandler {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    /// Saves the deal and returns the id it is stored under.
    pub async fn handle(&self, cmd: SaveDealCommand) -> Result<DealId, DealError> {
        let is_new = cmd.deal.id.is_unassigned();
        let id = self.repository.upsert(cmd.deal).await?;

        debug!(deal_id = %id, is_new, "Saved deal");

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDealRepository;
    use crate::domain::deal::DraftEdit;

    fn draft() -> DealDraft {
        DealDraft::new()
            .apply(DraftEdit::AreaChanged("Palm Jumeirah".to_string()))
            .apply(DraftEdit::SizeChanged("3000".to_string()))
            .apply(DraftEdit::AskingPriceChanged("9000000".to_string()))
            .apply(DraftEdit::ExpectedRentChanged("450000".to_string()))
    }

    #[tokio::test]
    async fn saving_draft_assigns_id_and_stores_deal() {
        let repo = Arc::new(InMemoryDealRepository::new());
        let handler = SaveDealHandler::new(repo.clone());

        let cmd = SaveDealCommand::from_draft(&draft(), Timestamp::now()).unwrap();
        let id = handler.handle(cmd).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.area, "Palm Jumeirah");
        assert_eq!(stored.title, "New Deal");
        assert_eq!(stored.service_charge_per_year, None);
    }

    #[tokio::test]
    async fn saving_existing_id_replaces_record() {
        let repo = Arc::new(InMemoryDealRepository::seeded(Timestamp::now()));
        let handler = SaveDealHandler::new(repo.clone());

        let mut deal = repo.find_by_id(&DealId::new("1")).await.unwrap().unwrap();
        deal.asking_price = 2_000_000.0;
        let id = handler.handle(SaveDealCommand { deal }).await.unwrap();

        assert_eq!(id, DealId::new("1"));
        assert_eq!(repo.len().await, 2);
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.asking_price, 2_000_000.0);
    }

    #[test]
    fn incomplete_draft_is_rejected() {
        let incomplete = draft().apply(DraftEdit::AskingPriceChanged("".to_string()));

        let result = SaveDealCommand::from_draft(&incomplete, Timestamp::now());

        match result {
            Err(DealError::ValidationFailed { field, .. }) => assert_eq!(field, "asking_price"),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }
}
