//! Deal-specific error types.

use crate::domain::foundation::{DealId, DomainError, ErrorCode, ValidationError};

/// Deal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// Deal was not found.
    NotFound(DealId),
    /// Input could not be turned into a deal.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DealError {
    pub fn not_found(id: DealId) -> Self {
        DealError::NotFound(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DealError::NotFound(_) => ErrorCode::DealNotFound,
            DealError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DealError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DealError::NotFound(id) => format!("Deal not found: {}", id),
            DealError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DealError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DealError {}

/// Ports only fail on storage problems.
impl From<DomainError> for DealError {
    fn from(err: DomainError) -> Self {
        DealError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for DealError {
    fn from(err: ValidationError) -> Self {
        DealError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
