//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DealRepository` - deal storage (list, lookup, upsert, delete)
//! - `AreaBenchmarkReader` - area statistics lookup
//! - `AssumptionsRepository` - shared financing assumptions

mod area_benchmark_reader;
mod assumptions_repository;
mod deal_repository;

pub use area_benchmark_reader::AreaBenchmarkReader;
pub use assumptions_repository::AssumptionsRepository;
pub use deal_repository::DealRepository;
