//! ListAreaBenchmarksHandler - Query handler for the area catalogue.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::market::AreaBenchmark;
use crate::ports::AreaBenchmarkReader;

/// Handler listing every known area (area picker, market overview).
pub struct ListAreaBenchmarksHandler {
    reader: Arc<dyn AreaBenchmarkReader>,
}

impl ListAreaBenchmarksHandler {
    pub fn new(reader: Arc<dyn AreaBenchmarkReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<AreaBenchmark>, DomainError> {
        self.reader.list().await
    }
}
