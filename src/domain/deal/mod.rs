//! Deal module - Candidate properties under evaluation.
//!
//! A `Deal` is the numeric record the analyzer reads. A `DealDraft` is the
//! text form being edited before it parses into a `Deal`.

mod deal;
mod draft;
mod errors;

pub use deal::Deal;
pub use draft::{DealDraft, DraftEdit, DEFAULT_DEAL_TITLE};
pub use errors::DealError;
