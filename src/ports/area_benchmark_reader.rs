//! Area benchmark reader port (read side).
//!
//! Benchmarks are static reference data; this core never writes them.

use crate::domain::foundation::DomainError;
use crate::domain::market::AreaBenchmark;
use async_trait::async_trait;

/// Read-only access to area benchmark statistics.
#[async_trait]
pub trait AreaBenchmarkReader: Send + Sync {
    /// List every known area, in catalogue order.
    async fn list(&self) -> Result<Vec<AreaBenchmark>, DomainError>;

    /// Find the benchmark for an area, matching the name case-insensitively.
    ///
    /// Returns `None` for unknown areas.
    async fn get_by_area(&self, area: &str) -> Result<Option<AreaBenchmark>, DomainError>;
}
