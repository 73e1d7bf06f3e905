//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Loan-to-value must be between 0 and 100 percent")]
    InvalidLtv,

    #[error("Interest rate must be a non-negative number")]
    InvalidInterestRate,

    #[error("Loan term must be at least one year")]
    InvalidTerm,

    #[error("Purchase costs must be a non-negative number")]
    InvalidPurchaseCosts,
}
