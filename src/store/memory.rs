//! In-memory document collection.
//!
//! A `Vec` of records behind an `RwLock`. Insertion order is the
//! store-default order, so unsorted finds are deterministic. Single-record
//! writes are atomic under the write lock; concurrent updates to the same
//! record race with last-write-wins semantics, which is the documented
//! contract.

use std::sync::RwLock;

use crate::query::QuerySpec;
use crate::record::{BookDraft, BookId, BookPatch, BookRecord};

use super::errors::{StoreError, StoreResult};
use super::BookStore;

/// In-memory `BookStore` backing.
pub struct MemoryStore {
    books: RwLock<Vec<BookRecord>>,
}

impl MemoryStore {
    /// Open an empty collection.
    pub fn open() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.books.read().map_err(|_| StoreError::poisoned())?.len())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::open()
    }
}

impl BookStore for MemoryStore {
    fn find(&self, query: &QuerySpec) -> StoreResult<Vec<BookRecord>> {
        let books = self.books.read().map_err(|_| StoreError::poisoned())?;

        let mut hits: Vec<BookRecord> = books
            .iter()
            .filter(|record| query.filter.matches(record))
            .cloned()
            .collect();

        if let Some(sort) = &query.sort {
            hits.sort_by(|a, b| sort.compare(a, b));
        }

        Ok(hits)
    }

    fn get(&self, id: &BookId) -> StoreResult<Option<BookRecord>> {
        let books = self.books.read().map_err(|_| StoreError::poisoned())?;
        Ok(books.iter().find(|record| record.id == *id).cloned())
    }

    fn insert(&self, draft: BookDraft) -> StoreResult<BookId> {
        let mut books = self.books.write().map_err(|_| StoreError::poisoned())?;
        let id = BookId::generate();
        books.push(draft.into_record(id));
        Ok(id)
    }

    fn update(&self, id: &BookId, patch: &BookPatch) -> StoreResult<u64> {
        let mut books = self.books.write().map_err(|_| StoreError::poisoned())?;
        match books.iter_mut().find(|record| record.id == *id) {
            Some(record) => {
                patch.apply(record);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&self, id: &BookId) -> StoreResult<u64> {
        let mut books = self.books.write().map_err(|_| StoreError::poisoned())?;
        match books.iter().position(|record| record.id == *id) {
            Some(idx) => {
                books.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
