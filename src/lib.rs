//! bookstore - a strict, self-hostable book-inventory record service
//!
//! HTTP in, document-store operations out. The pipeline:
//! request -> query construction or payload validation -> service -> store.

pub mod cli;
pub mod http;
pub mod observability;
pub mod query;
pub mod record;
pub mod service;
pub mod store;
pub mod validate;
