//! # HTTP Surface
//!
//! Axum router, handlers, and the response/error contract:
//!
//! - `GET /books` (also under `/api`): list with filter/sort params
//! - `GET /books/:id`: fetch one record
//! - `POST /book`: create
//! - `PUT /book/:id`: partial update
//! - `DELETE /book/:id`: delete
//! - `GET /health`: liveness
//!
//! Error bodies are `{"error": ...}` for 400/500 and `{"message": ...}` for
//! 404; success bodies are JSON.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use routes::book_routes;
pub use server::HttpServer;
