//! Book HTTP routes.
//!
//! Handlers are thin: build a `QuerySpec` or run the validator, call the
//! service, wrap the outcome. Everything that can go wrong is an `ApiError`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::query::QuerySpec;
use crate::record::BookRecord;
use crate::service::BookService;
use crate::validate;

use super::errors::ApiError;
use super::response::{CreatedResponse, HealthResponse, MessageResponse};

/// State shared across book handlers.
pub struct AppState {
    pub service: BookService,
}

impl AppState {
    pub fn new(service: BookService) -> Self {
        Self { service }
    }
}

/// Router for the book CRUD surface.
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler))
        .route("/books/:id", get(get_book_handler))
        .route("/book", post(create_book_handler))
        .route("/book/:id", put(update_book_handler))
        .route("/book/:id", delete(delete_book_handler))
        .with_state(state)
}

/// Router for liveness.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// List records, filtered and sorted per query parameters.
async fn list_books_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<BookRecord>>, ApiError> {
    let query = QuerySpec::from_params(&params);
    let books = state.service.list(&query)?;
    Ok(Json(books))
}

/// Fetch a single record by identifier.
async fn get_book_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookRecord>, ApiError> {
    let book = state.service.get(&id)?;
    Ok(Json(book))
}

/// Create a record from a JSON payload.
async fn create_book_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let draft = validate::validate_create(&body)?;
    let id = state.service.create(draft)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Partially update the identified record.
async fn update_book_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = validate::validate_update(&body)?;
    state.service.update(&id, &patch)?;
    Ok(Json(MessageResponse::new("book updated")))
}

/// Delete the identified record.
async fn delete_book_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(&id)?;
    Ok(Json(MessageResponse::new("book deleted")))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
