//! Query parameter parsing.
//!
//! Builds a `QuerySpec` from the loose `key=value` map the HTTP layer hands
//! over. Unknown parameters and unparsable values are ignored; there is no
//! failure path here.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::record::BookRecord;

use super::filter::BookFilter;

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Year,
}

impl SortKey {
    /// Recognize a `sortBy` parameter value. Anything else sorts nothing.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "rating" => Some(SortKey::Rating),
            "year" => Some(SortKey::Year),
            _ => None,
        }
    }
}

/// Sort direction, ascending unless `order=desc` was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A sort key with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    /// Compare two records under this sort.
    ///
    /// Records missing the sort field order as if the field held the minimum
    /// value, matching document-store missing-field sort behavior.
    pub fn compare(&self, a: &BookRecord, b: &BookRecord) -> Ordering {
        let ord = match self.key {
            SortKey::Rating => {
                let a = a.rating.unwrap_or(f64::NEG_INFINITY);
                let b = b.rating.unwrap_or(f64::NEG_INFINITY);
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            SortKey::Year => {
                let a = a.year.unwrap_or(i64::MIN);
                let b = b.year.unwrap_or(i64::MIN);
                a.cmp(&b)
            }
        };

        match self.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// A complete listing query: filter predicates plus an optional sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    pub filter: BookFilter,
    pub sort: Option<SortSpec>,
}

impl QuerySpec {
    /// A spec that matches every record in store-default order.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Build a spec from request query parameters.
    ///
    /// Recognized parameters: `author`, `available`, `genres`, `minRating`,
    /// `sortBy`, `order`. `available` maps the literal `"true"` to true and
    /// every other value to false. A `minRating` that does not parse as a
    /// finite number adds no predicate. A `sortBy` outside {rating, year}
    /// adds no sort.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut filter = BookFilter::default();

        if let Some(author) = params.get("author") {
            filter.author = Some(author.clone());
        }

        if let Some(available) = params.get("available") {
            filter.available = Some(available == "true");
        }

        if let Some(tag) = params.get("genres") {
            filter.genres = Some(tag.clone());
        }

        if let Some(raw) = params.get("minRating") {
            if let Ok(min) = raw.parse::<f64>() {
                if min.is_finite() {
                    filter.min_rating = Some(min);
                }
            }
        }

        let sort = params
            .get("sortBy")
            .and_then(|raw| SortKey::from_param(raw))
            .map(|key| SortSpec {
                key,
                order: match params.get("order").map(String::as_str) {
                    Some("desc") => SortOrder::Descending,
                    _ => SortOrder::Ascending,
                },
            });

        Self { filter, sort }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{BookDraft, BookId};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_params_yields_unconstrained_spec() {
        let spec = QuerySpec::from_params(&HashMap::new());
        assert_eq!(spec, QuerySpec::unconstrained());
        assert!(spec.filter.is_empty());
        assert!(spec.sort.is_none());
    }

    #[test]
    fn test_author_and_genres_pass_through() {
        let spec = QuerySpec::from_params(&params(&[("author", "Borges"), ("genres", "essays")]));
        assert_eq!(spec.filter.author.as_deref(), Some("Borges"));
        assert_eq!(spec.filter.genres.as_deref(), Some("essays"));
    }

    #[test]
    fn test_available_literal_true_everything_else_false() {
        let spec = QuerySpec::from_params(&params(&[("available", "true")]));
        assert_eq!(spec.filter.available, Some(true));

        let spec = QuerySpec::from_params(&params(&[("available", "TRUE")]));
        assert_eq!(spec.filter.available, Some(false));

        let spec = QuerySpec::from_params(&params(&[("available", "yes")]));
        assert_eq!(spec.filter.available, Some(false));
    }

    #[test]
    fn test_min_rating_parses_finite_numbers() {
        let spec = QuerySpec::from_params(&params(&[("minRating", "4.2")]));
        assert_eq!(spec.filter.min_rating, Some(4.2));
    }

    #[test]
    fn test_unparsable_min_rating_is_dropped() {
        for bad in ["abc", "", "NaN", "inf"] {
            let spec = QuerySpec::from_params(&params(&[("minRating", bad)]));
            assert_eq!(spec.filter.min_rating, None, "minRating={bad:?}");
        }
    }

    #[test]
    fn test_sort_by_rating_desc() {
        let spec = QuerySpec::from_params(&params(&[("sortBy", "rating"), ("order", "desc")]));
        let sort = spec.sort.unwrap();
        assert_eq!(sort.key, SortKey::Rating);
        assert_eq!(sort.order, SortOrder::Descending);
    }

    #[test]
    fn test_unknown_sort_key_is_ignored() {
        let spec = QuerySpec::from_params(&params(&[("sortBy", "title"), ("order", "desc")]));
        assert!(spec.sort.is_none());
    }

    #[test]
    fn test_order_defaults_to_ascending() {
        let spec = QuerySpec::from_params(&params(&[("sortBy", "year"), ("order", "upward")]));
        assert_eq!(spec.sort.unwrap().order, SortOrder::Ascending);
    }

    #[test]
    fn test_compare_orders_missing_fields_first() {
        let with_rating = BookDraft {
            title: "A".to_string(),
            author: "A".to_string(),
            year: None,
            available: None,
            genres: None,
            rating: Some(2.0),
            stock: None,
        }
        .into_record(BookId::generate());
        let without_rating = BookRecord {
            rating: None,
            ..with_rating.clone()
        };

        let sort = SortSpec {
            key: SortKey::Rating,
            order: SortOrder::Ascending,
        };
        assert_eq!(
            sort.compare(&without_rating, &with_rating),
            Ordering::Less
        );
    }
}
