//! Financing module - Shared loan assumptions applied to every deal.

mod assumptions;

pub use assumptions::{
    FinancingAssumptions, DEFAULT_INTEREST_RATE_PERCENT, DEFAULT_LTV_PERCENT,
    DEFAULT_PURCHASE_COSTS_PERCENT, DEFAULT_TERM_YEARS,
};
