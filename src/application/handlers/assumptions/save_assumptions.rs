//! SaveAssumptionsHandler - Command handler replacing the financing assumptions.

use std::sync::Arc;

use tracing::debug;

use crate::domain::financing::FinancingAssumptions;
use crate::domain::foundation::DomainError;
use crate::ports::AssumptionsRepository;

/// Command carrying the complete replacement assumptions.
#[derive(Debug, Clone, Copy)]
pub struct SaveAssumptionsCommand {
    pub assumptions: FinancingAssumptions,
}

/// Handler for replacing assumptions wholesale.
pub struct SaveAssumptionsHandler {
    repository: Arc<dyn AssumptionsRepository>,
}

impl SaveAssumptionsHandler {
    pub fn new(repository: Arc<dyn AssumptionsRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveAssumptionsCommand) -> Result<(), DomainError> {
        let a = cmd.assumptions;
        self.repository.replace(a).await?;

        debug!(
            ltv_percent = a.ltv_percent,
            interest_rate_percent = a.interest_rate_percent,
            term_years = a.term_years,
            "Replaced financing assumptions"
        );

        Ok(())
    }
}
