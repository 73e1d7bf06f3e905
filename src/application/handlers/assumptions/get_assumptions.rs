//! GetAssumptionsHandler - Query handler for the current financing assumptions.

use std::sync::Arc;

use crate::domain::financing::FinancingAssumptions;
use crate::domain::foundation::DomainError;
use crate::ports::AssumptionsRepository;

/// Handler returning the assumptions currently in force.
pub struct GetAssumptionsHandler {
    repository: Arc<dyn AssumptionsRepository>,
}

impl GetAssumptionsHandler {
    pub fn new(repository: Arc<dyn AssumptionsRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<FinancingAssumptions, DomainError> {
        self.repository.get().await
    }
}
