//! Financing assumptions port.

use crate::domain::financing::FinancingAssumptions;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Storage for the single set of financing assumptions.
#[async_trait]
pub trait AssumptionsRepository: Send + Sync {
    /// Returns the current assumptions.
    async fn get(&self) -> Result<FinancingAssumptions, DomainError>;

    /// Replaces the assumptions wholesale. There is no partial update.
    async fn replace(&self, assumptions: FinancingAssumptions) -> Result<(), DomainError>;
}
