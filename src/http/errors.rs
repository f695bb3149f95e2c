//! HTTP error mapping.
//!
//! One wrapper over the service/validation taxonomy, carrying the
//! status-code mapping and the response body shape. Internal faults are
//! logged here, at the boundary, with a generic body for the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::observability::{Logger, Severity};
use crate::service::ServiceError;
use crate::validate::ValidationError;

use super::response::{ErrorResponse, MessageResponse};

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Client payload violates a field rule (400).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Malformed record identifier (400).
    #[error("invalid book identifier: {0}")]
    InvalidIdentifier(String),

    /// No matching record, including an empty listing (404).
    #[error("no matching book found")]
    NotFound,

    /// Store or unexpected fault (500); detail stays server-side.
    #[error("internal server error")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidIdentifier(id) => ApiError::InvalidIdentifier(id),
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal(detail) = &self {
            Logger::log_stderr(Severity::Error, "internal_error", &[("detail", detail)]);
        }

        // Not-found responses use {message}; everything else uses {error}
        match self {
            ApiError::NotFound => {
                (status, Json(MessageResponse::new(self.to_string()))).into_response()
            }
            _ => (status, Json(ErrorResponse::new(self.to_string()))).into_response(),
        }
    }
}
