//! In-Memory Deal Repository
//!
//! Keeps deals in insertion order; listing sorts a snapshot by creation time.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::deal::Deal;
use crate::domain::foundation::{DealId, DomainError, Timestamp};
use crate::ports::DealRepository;

/// In-memory storage for deals
#[derive(Debug, Clone, Default)]
pub struct InMemoryDealRepository {
    deals: Arc<RwLock<Vec<Deal>>>,
}

impl InMemoryDealRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given deals, in order
    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            deals: Arc::new(RwLock::new(deals)),
        }
    }

    /// Create a repository with the two sample listings, created at `now`
    pub fn seeded(now: Timestamp) -> Self {
        Self::with_deals(sample_deals(now))
    }

    /// Get the number of stored deals
    pub async fn len(&self) -> usize {
        self.deals.read().await.len()
    }

    /// Returns true if no deals are stored
    pub async fn is_empty(&self) -> bool {
        self.deals.read().await.is_empty()
    }
}

#[async_trait]
impl DealRepository for InMemoryDealRepository {
    async fn list(&self) -> Result<Vec<Deal>, DomainError> {
        let mut deals = self.deals.read().await.clone();
        // Stable sort keeps insertion order for equal timestamps
        deals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(deals)
    }

    async fn find_by_id(&self, id: &DealId) -> Result<Option<Deal>, DomainError> {
        let deals = self.deals.read().await;
        Ok(deals.iter().find(|d| &d.id == id).cloned())
    }

    async fn upsert(&self, deal: Deal) -> Result<DealId, DomainError> {
        let mut deals = self.deals.write().await;

        if !deal.id.is_unassigned() {
            if let Some(existing) = deals.iter_mut().find(|d| d.id == deal.id) {
                let created_at = existing.created_at;
                *existing = Deal { created_at, ..deal };
                return Ok(existing.id.clone());
            }
        }

        let deal = if deal.id.is_unassigned() {
            deal.with_id(DealId::generate())
        } else {
            deal
        };
        let id = deal.id.clone();
        deals.push(deal);
        Ok(id)
    }

    async fn delete(&self, id: &DealId) -> Result<(), DomainError> {
        self.deals.write().await.retain(|d| &d.id != id);
        Ok(())
    }
}

fn sample_deals(now: Timestamp) -> Vec<Deal> {
    vec![
        Deal {
            id: DealId::new("1"),
            title: "Dubai Marina 2BR".to_string(),
            area: "Dubai Marina".to_string(),
            bedrooms: 2,
            size_sqft: 1200.0,
            asking_price: 2_200_000.0,
            expected_rent_per_year: 160_000.0,
            service_charge_per_year: Some(12_000.0),
            additional_costs_per_year: Some(3_000.0),
            created_at: now,
        },
        Deal {
            id: DealId::new("2"),
            title: "JVC Studio".to_string(),
            area: "JVC".to_string(),
            bedrooms: 0,
            size_sqft: 450.0,
            asking_price: 500_000.0,
            expected_rent_per_year: 40_000.0,
            service_charge_per_year: Some(5_000.0),
            additional_costs_per_year: Some(1_000.0),
            created_at: now,
        },
    ]
}
