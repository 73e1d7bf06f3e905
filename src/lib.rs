//! PropLens - Real-estate deal evaluation
//!
//! This crate computes yield, cashflow and price-fairness verdicts for
//! property listings against area benchmarks and shared financing
//! assumptions, and provides the stores and handlers around that analysis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
