//! # Observability
//!
//! Structured JSON logging: one synchronous line per event, deterministic
//! field ordering, no buffering. The service logs lifecycle events (store
//! open, server start) and every internal-error boundary; the detail stays
//! in the server log and never reaches a client.

pub mod logger;

pub use logger::{Logger, Severity};
