//! Service error types.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcomes of a CRUD operation that are not success.
///
/// Identifier checks run before any store call; a malformed identifier never
/// costs a store round-trip. Store faults collapse to `Internal` here so
/// driver details stop at this boundary.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The supplied identifier is not a valid record identifier.
    #[error("invalid book identifier: {0}")]
    InvalidIdentifier(String),

    /// No record matched, including an empty listing result.
    #[error("no matching book found")]
    NotFound,

    /// The store faulted; detail is for the server log, not the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
