//! # Book Record Model
//!
//! The persisted `BookRecord` entity, its `BookId` identifier, and the
//! validated payload types (`BookDraft` for create, `BookPatch` for update).

pub mod types;

pub use types::{BookDraft, BookId, BookPatch, BookRecord};
