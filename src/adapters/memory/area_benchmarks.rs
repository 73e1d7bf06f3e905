//! In-Memory Area Benchmarks
//!
//! A fixed catalogue of area statistics.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::market::AreaBenchmark;
use crate::ports::AreaBenchmarkReader;

/// Read-only benchmark catalogue held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryAreaBenchmarks {
    benchmarks: Arc<Vec<AreaBenchmark>>,
}

impl InMemoryAreaBenchmarks {
    /// Create a catalogue from the given benchmarks
    pub fn new(benchmarks: Vec<AreaBenchmark>) -> Self {
        Self {
            benchmarks: Arc::new(benchmarks),
        }
    }

    /// The Dubai reference catalogue shipped with the app
    pub fn dubai() -> Self {
        Self::new(vec![
            AreaBenchmark::new("Dubai Marina", 1800.0, 130.0),
            AreaBenchmark::new("Downtown Dubai", 2200.0, 150.0),
            AreaBenchmark::new("JVC", 950.0, 75.0),
            AreaBenchmark::new("Palm Jumeirah", 2800.0, 170.0),
        ])
    }
}

#[async_trait]
impl AreaBenchmarkReader for InMemoryAreaBenchmarks {
    async fn list(&self) -> Result<Vec<AreaBenchmark>, DomainError> {
        Ok(self.benchmarks.as_ref().clone())
    }

    async fn get_by_area(&self, area: &str) -> Result<Option<AreaBenchmark>, DomainError> {
        Ok(self.benchmarks.iter().find(|b| b.matches(area)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dubai_lists_four_areas_in_order() {
        let catalogue = InMemoryAreaBenchmarks::dubai();
        let areas: Vec<_> = catalogue
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.area)
            .collect();
        assert_eq!(
            areas,
            vec!["Dubai Marina", "Downtown Dubai", "JVC", "Palm Jumeirah"]
        );
    }

    #[tokio::test]
    async fn get_by_area_is_case_insensitive() {
        let catalogue = InMemoryAreaBenchmarks::dubai();
        let jvc = catalogue.get_by_area("jvc").await.unwrap().unwrap();
        assert_eq!(jvc.avg_price_per_sqft, 950.0);
        assert_eq!(jvc.avg_rent_per_sqft_per_year, 75.0);
    }

    #[tokio::test]
    async fn get_by_area_unknown_returns_none() {
        let catalogue = InMemoryAreaBenchmarks::dubai();
        assert_eq!(catalogue.get_by_area("Business Bay").await.unwrap(), None);
    }

    #[tokio::test]
    async fn first_match_wins_for_duplicate_names() {
        let catalogue = InMemoryAreaBenchmarks::new(vec![
            AreaBenchmark::new("JVC", 950.0, 75.0),
            AreaBenchmark::new("jvc", 1.0, 1.0),
        ]);
        let jvc = catalogue.get_by_area("JVC").await.unwrap().unwrap();
        assert_eq!(jvc.avg_price_per_sqft, 950.0);
    }

    #[tokio::test]
    async fn empty_catalogue_finds_nothing() {
        let catalogue = InMemoryAreaBenchmarks::default();
        assert!(catalogue.list().await.unwrap().is_empty());
        assert_eq!(catalogue.get_by_area("JVC").await.unwrap(), None);
    }
}
