//! # Book Operations
//!
//! `BookService` executes the five CRUD operations against an injected store
//! handle and maps store outcomes onto the service error taxonomy. Payloads
//! arrive already validated; the only checks left here are identifier format
//! (before any store call) and match counts (after).

pub mod errors;

pub use errors::{ServiceError, ServiceResult};

use std::sync::Arc;

use crate::query::QuerySpec;
use crate::record::{BookDraft, BookId, BookPatch, BookRecord};
use crate::store::BookStore;

/// CRUD executor over a shared store handle.
#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    /// Build a service around an opened store handle.
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List records matching the query.
    ///
    /// An empty result is `NotFound` by contract: callers distinguish "no
    /// books matched" from a store fault.
    pub fn list(&self, query: &QuerySpec) -> ServiceResult<Vec<BookRecord>> {
        let books = self.store.find(query)?;
        if books.is_empty() {
            return Err(ServiceError::NotFound);
        }
        Ok(books)
    }

    /// Fetch one record by its identifier.
    pub fn get(&self, raw_id: &str) -> ServiceResult<BookRecord> {
        let id = parse_id(raw_id)?;
        self.store.get(&id)?.ok_or(ServiceError::NotFound)
    }

    /// Insert a validated draft; returns the store-assigned identifier.
    pub fn create(&self, draft: BookDraft) -> ServiceResult<BookId> {
        Ok(self.store.insert(draft)?)
    }

    /// Merge a validated patch into the identified record.
    pub fn update(&self, raw_id: &str, patch: &BookPatch) -> ServiceResult<()> {
        let id = parse_id(raw_id)?;
        if self.store.update(&id, patch)? == 0 {
            return Err(ServiceError::NotFound);
        }
        Ok(())
    }

    /// Remove the identified record.
    pub fn delete(&self, raw_id: &str) -> ServiceResult<()> {
        let id = parse_id(raw_id)?;
        if self.store.delete(&id)? == 0 {
            return Err(ServiceError::NotFound);
        }
        Ok(())
    }
}

/// Identifier format check, ahead of every by-id store call.
fn parse_id(raw: &str) -> ServiceResult<BookId> {
    raw.parse()
        .map_err(|_| ServiceError::InvalidIdentifier(raw.to_string()))
}
