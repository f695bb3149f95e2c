//! Filter predicates over book records.
//!
//! All predicates combine with AND logic. A record matches an empty filter.

use crate::record::BookRecord;

/// The filter half of a `QuerySpec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    /// Exact match on `author`.
    pub author: Option<String>,

    /// Equality on the `available` flag.
    pub available: Option<bool>,

    /// Membership: the record's `genres` sequence must contain this tag.
    pub genres: Option<String>,

    /// Lower bound (inclusive) on `rating`.
    pub min_rating: Option<f64>,
}

impl BookFilter {
    /// True when no predicate is set (matches everything).
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.available.is_none()
            && self.genres.is_none()
            && self.min_rating.is_none()
    }

    /// Check a record against every predicate.
    ///
    /// A predicate on an optional field fails when the field is absent: a
    /// record with no `rating` never satisfies `min_rating`, and a record
    /// with no `genres` never satisfies a genre predicate.
    pub fn matches(&self, record: &BookRecord) -> bool {
        if let Some(author) = &self.author {
            if record.author != *author {
                return false;
            }
        }

        if let Some(available) = self.available {
            if record.available != Some(available) {
                return false;
            }
        }

        if let Some(tag) = &self.genres {
            match &record.genres {
                Some(genres) if genres.iter().any(|g| g == tag) => {}
                _ => return false,
            }
        }

        if let Some(min) = self.min_rating {
            match record.rating {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }

        true
    }
}
