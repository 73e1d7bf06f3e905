//! Analysis Module - Pure domain services for deal evaluation.
//!
//! # Components
//!
//! - `DealAnalyzer` - price per sqft, gross/net yield, cashflow, verdict
//! - `DealAnalysis` - the headline metrics of one run
//! - `AnalysisBreakdown` - the same run with every intermediate figure
//! - `Verdict` - price fairness against an area benchmark
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod analyzer;
mod report;
mod verdict;

pub use analyzer::DealAnalyzer;
pub use report::{AnalysisBreakdown, DealAnalysis};
pub use verdict::{Verdict, OVERPRICED_ABOVE_RATIO, UNDERVALUED_BELOW_RATIO};
