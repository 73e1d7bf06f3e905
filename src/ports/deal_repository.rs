//! Deal repository port.
//!
//! Defines the contract for storing and retrieving deals.
//!
//! # Design
//!
//! - **Upsert semantics**: one write operation covers insert and replace
//! - **Absence is not an error**: lookups return `Ok(None)`
//! - **Newest first**: listings are ordered by creation time, descending

use crate::domain::deal::Deal;
use crate::domain::foundation::{DealId, DomainError};
use async_trait::async_trait;

/// Repository port for deals.
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// List every deal, newest-created first.
    ///
    /// Deals created at the same instant keep their insertion order.
    async fn list(&self) -> Result<Vec<Deal>, DomainError>;

    /// Find a deal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DealId) -> Result<Option<Deal>, DomainError>;

    /// Insert or replace a deal, returning the id it is stored under.
    ///
    /// A deal whose id is unassigned or unknown is inserted; an unassigned id
    /// is replaced with a freshly generated one. A deal whose id is already
    /// stored replaces that record in place, keeping the stored `created_at`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert(&self, deal: Deal) -> Result<DealId, DomainError>;

    /// Delete a deal. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &DealId) -> Result<(), DomainError>;
}
