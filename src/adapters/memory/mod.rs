//! In-Memory Adapters
//!
//! Implementations of every port backed by process memory. Each store is an
//! explicit object with cloneable handles; the composition root creates one
//! of each and shares it with the handlers.
//!
//! ## Usage
//!
//! ```ignore
//! use proplens::adapters::memory::{InMemoryAreaBenchmarks, InMemoryDealRepository};
//!
//! // Sample data matching the mobile app's demo listings
//! let deals = InMemoryDealRepository::seeded(Timestamp::now());
//! let benchmarks = InMemoryAreaBenchmarks::dubai();
//! ```

mod area_benchmarks;
mod assumptions;
mod deal_repository;

pub use area_benchmarks::InMemoryAreaBenchmarks;
pub use assumptions::InMemoryAssumptions;
pub use deal_repository::InMemoryDealRepository;
