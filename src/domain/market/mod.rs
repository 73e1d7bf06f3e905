//! Market module - Reference statistics for comparison areas.

mod benchmark;

pub use benchmark::AreaBenchmark;
