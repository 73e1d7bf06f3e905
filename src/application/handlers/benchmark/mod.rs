//! Area benchmark query handlers.

mod get_area_benchmark;
mod list_area_benchmarks;

pub use get_area_benchmark::{GetAreaBenchmarkHandler, GetAreaBenchmarkQuery};
pub use list_area_benchmarks::ListAreaBenchmarksHandler;
