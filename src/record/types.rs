//! Core record types for the book collection.
//!
//! A `BookRecord` is one document in the collection. Identifiers are
//! store-assigned UUIDs; clients never choose them. `BookDraft` and
//! `BookPatch` are the outputs of validation and the only shapes the store
//! accepts for writes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned unique identifier for a book record.
///
/// Serialized as the canonical hyphenated UUID string. Parsing is the single
/// identifier-format check in the system: anything `Uuid::parse_str` rejects
/// is a malformed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh identifier (store-side, on insert).
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One book entity in the document collection.
///
/// `title` and `author` are non-empty for every stored record. Optional
/// fields are omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Immutable, store-assigned identifier.
    pub id: BookId,

    /// Book title, non-empty.
    pub title: String,

    /// Author name, non-empty.
    pub author: String,

    /// Publication year, >= 1800 when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,

    /// Availability flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    /// Ordered genre tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,

    /// Rating in [0, 5] when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Stock count, unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
}

/// A validated create payload: everything a `BookRecord` has except the
/// identifier, which the store assigns on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
    pub available: Option<bool>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub stock: Option<f64>,
}

impl BookDraft {
    /// Materialize the draft into a record under the given identifier.
    pub fn into_record(self, id: BookId) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            available: self.available,
            genres: self.genres,
            rating: self.rating,
            stock: self.stock,
        }
    }
}

/// A validated partial update: only supplied fields change, omitted fields
/// keep their prior value. The identifier is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
    pub available: Option<bool>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub stock: Option<f64>,
}

impl BookPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.available.is_none()
            && self.genres.is_none()
            && self.rating.is_none()
            && self.stock.is_none()
    }

    /// Merge the patch into an existing record, field by field.
    pub fn apply(&self, record: &mut BookRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(author) = &self.author {
            record.author = author.clone();
        }
        if let Some(year) = self.year {
            record.year = Some(year);
        }
        if let Some(available) = self.available {
            record.available = Some(available);
        }
        if let Some(genres) = &self.genres {
            record.genres = Some(genres.clone());
        }
        if let Some(rating) = self.rating {
            record.rating = Some(rating);
        }
        if let Some(stock) = self.stock {
            record.stock = Some(stock);
        }
    }
}
