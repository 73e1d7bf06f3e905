//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to concrete storage:
//! - `memory` - in-process stores for deals, benchmarks and assumptions

pub mod memory;

pub use memory::{InMemoryAreaBenchmarks, InMemoryAssumptions, InMemoryDealRepository};
