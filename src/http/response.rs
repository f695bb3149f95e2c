//! Response body types.

use serde::Serialize;

use crate::record::BookId;

/// Body for a successful create: confirmation plus the assigned identifier.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "bookId")]
    pub book_id: BookId,
}

impl CreatedResponse {
    pub fn new(book_id: BookId) -> Self {
        Self {
            message: "book created".to_string(),
            book_id,
        }
    }
}

/// Plain confirmation body (update/delete success, and 404 bodies).
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for 400/500 responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
