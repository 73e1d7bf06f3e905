//! In-Memory Assumptions Store

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::financing::FinancingAssumptions;
use crate::domain::foundation::DomainError;
use crate::ports::AssumptionsRepository;

/// Holds the current financing assumptions in memory
#[derive(Debug, Clone)]
pub struct InMemoryAssumptions {
    current: Arc<RwLock<FinancingAssumptions>>,
}

impl InMemoryAssumptions {
    /// Create a store holding `initial`
    pub fn new(initial: FinancingAssumptions) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }
}

impl Default for InMemoryAssumptions {
    fn default() -> Self {
        Self::new(FinancingAssumptions::default())
    }
}

#[async_trait]
impl AssumptionsRepository for InMemoryAssumptions {
    async fn get(&self) -> Result<FinancingAssumptions, DomainError> {
        Ok(*self.current.read().await)
    }

    async fn replace(&self, assumptions: FinancingAssumptions) -> Result<(), DomainError> {
        *self.current.write().await = assumptions;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_store_returns_default_assumptions() {
        let store = InMemoryAssumptions::default();
        assert_eq!(store.get().await.unwrap(), FinancingAssumptions::default());
    }

    #[tokio::test]
    async fn replace_swaps_all_fields() {
        let store = InMemoryAssumptions::default();
        let replacement = FinancingAssumptions {
            ltv_percent: 50.0,
            interest_rate_percent: 6.0,
            term_years: 15,
            purchase_costs_percent: 7.0,
        };

        store.replace(replacement).await.unwrap();

        assert_eq!(store.get().await.unwrap(), replacement);
    }

    #[tokio::test]
    async fn clones_observe_replacement() {
        let store = InMemoryAssumptions::default();
        let handle = store.clone();
        let replacement = FinancingAssumptions {
            ltv_percent: 80.0,
            ..Default::default()
        };

        handle.replace(replacement).await.unwrap();

        assert_eq!(store.get().await.unwrap().ltv_percent, 80.0);
    }
}
