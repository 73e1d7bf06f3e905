//! Domain layer - Pure types and services.
//!
//! Nothing in this layer performs I/O.

pub mod analysis;
pub mod deal;
pub mod financing;
pub mod foundation;
pub mod market;
