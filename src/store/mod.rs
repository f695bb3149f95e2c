//! # Document Store Seam
//!
//! The `BookStore` trait is the boundary between this service and whatever
//! holds the documents. A deployment would put a remote document database
//! behind it; `MemoryStore` is the built-in backing and the test double.
//!
//! The handle is injected wherever it is needed (`Arc<dyn BookStore>`);
//! there is no process-wide store state.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::query::QuerySpec;
use crate::record::{BookDraft, BookId, BookPatch, BookRecord};

/// Collection operations the service needs from a document store.
///
/// Filtering and sorting happen store-side: `find` receives the full
/// `QuerySpec`. Writes return match/delete counts so callers can distinguish
/// "no such record" from a backend fault.
pub trait BookStore: Send + Sync {
    /// Find records matching the spec's filter, sorted per its sort key.
    /// An unsorted spec returns records in store-default (insertion) order.
    fn find(&self, query: &QuerySpec) -> StoreResult<Vec<BookRecord>>;

    /// Fetch a single record by identifier.
    fn get(&self, id: &BookId) -> StoreResult<Option<BookRecord>>;

    /// Insert a new record; the store assigns and returns the identifier.
    fn insert(&self, draft: BookDraft) -> StoreResult<BookId>;

    /// Merge a patch into the identified record. Returns the matched count
    /// (0 or 1).
    fn update(&self, id: &BookId, patch: &BookPatch) -> StoreResult<u64>;

    /// Remove the identified record. Returns the deleted count (0 or 1).
    fn delete(&self, id: &BookId) -> StoreResult<u64>;
}
