//! # Payload Validation
//!
//! Validates loosely-typed JSON request bodies into the typed write shapes
//! (`BookDraft`, `BookPatch`) before anything reaches the store.
//!
//! Validation is a single pass that collects every violation instead of
//! stopping at the first, does not mutate its input, and fails closed: one
//! violation rejects the whole payload.

pub mod errors;
pub mod record;

pub use errors::{ValidationError, Violation};
pub use record::{validate_create, validate_update};
