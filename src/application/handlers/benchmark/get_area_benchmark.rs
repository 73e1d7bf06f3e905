//! GetAreaBenchmarkHandler - Query handler for one area's statistics.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::market::AreaBenchmark;
use crate::ports::AreaBenchmarkReader;

/// Query for an area by name (case-insensitive).
#[derive(Debug, Clone)]
pub struct GetAreaBenchmarkQuery {
    pub area: String,
}

/// Handler returning an area's benchmark, or `None` if unknown.
pub struct GetAreaBenchmarkHandler {
    reader: Arc<dyn AreaBenchmarkReader>,
}

impl GetAreaBenchmarkHandler {
    pub fn new(reader: Arc<dyn AreaBenchmarkReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetAreaBenchmarkQuery,
    ) -> Result<Option<AreaBenchmark>, DomainError> {
        self.reader.get_by_area(&query.area).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAreaBenchmarks;

    fn handler() -> GetAreaBenchmarkHandler {
        GetAreaBenchmarkHandler::new(Arc::new(InMemoryAreaBenchmarks::dubai()))
    }

    #[tokio::test]
    async fn finds_area_ignoring_case() {
        let benchmark = handler()
            .handle(GetAreaBenchmarkQuery {
                area: "PALM JUMEIRAH".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(benchmark.area, "Palm Jumeirah");
        assert_eq!(benchmark.avg_price_per_sqft, 2800.0);
    }

    #[tokio::test]
    async fn unknown_area_is_none() {
        let benchmark = handler()
            .handle(GetAreaBenchmarkQuery {
                area: "Al Barsha".to_string(),
            })
            .await
            .unwrap();

        assert!(benchmark.is_none());
    }
}
