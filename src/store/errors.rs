//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Faults from the backing document store.
///
/// These never carry client-input problems; validation and identifier checks
/// happen before the store is called. Every variant maps to an internal
/// error at the service boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend failed or its state is unusable.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// A poisoned in-process lock; the collection state can no longer be
    /// trusted.
    pub fn poisoned() -> Self {
        StoreError::Backend("collection lock poisoned".to_string())
    }
}
