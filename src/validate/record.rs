//! Field-by-field payload validation.
//!
//! Presence is decided by JSON shape, not truthiness: a field is absent iff
//! the key is missing or its value is `null`. `0`, `0.0`, and `""` count as
//! present and are checked against the field rules, so `rating: 0` is a valid
//! boundary value while `title: ""` is a violation.

use serde_json::{Map, Value};

use crate::record::{BookDraft, BookPatch};

use super::errors::{ValidationError, Violation};

/// Fields a book payload may carry.
const KNOWN_FIELDS: &[&str] = &[
    "title",
    "author",
    "year",
    "available",
    "genres",
    "rating",
    "stock",
];

/// Validate a create payload into a `BookDraft`.
///
/// `title` and `author` must be present non-empty strings. Optional fields
/// are checked only when present. Fields outside the record schema are
/// rejected, including any client-supplied identifier: the store assigns ids.
pub fn validate_create(payload: &Value) -> Result<BookDraft, ValidationError> {
    let obj = match payload.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::new(vec![Violation::NotAnObject])),
    };

    let mut violations = Vec::new();
    reject_unknown_fields(obj, &[], &mut violations);

    let title = required_text(obj, "title", &mut violations);
    let author = required_text(obj, "author", &mut violations);
    let year = check_year(field(obj, "year"), &mut violations);
    let available = check_available(field(obj, "available"), &mut violations);
    let genres = check_genres(field(obj, "genres"), &mut violations);
    let rating = check_rating(field(obj, "rating"), &mut violations);
    let stock = check_stock(field(obj, "stock"), &mut violations);

    match (title, author) {
        (Some(title), Some(author)) if violations.is_empty() => Ok(BookDraft {
            title,
            author,
            year,
            available,
            genres,
            rating,
            stock,
        }),
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validate an update payload into a `BookPatch`.
///
/// Same field rules as create, except nothing is required: `title`/`author`
/// are checked only when supplied. An `id` or `_id` field in the body is
/// stripped before validation and never applied; the path-supplied identifier
/// is authoritative.
pub fn validate_update(payload: &Value) -> Result<BookPatch, ValidationError> {
    let obj = match payload.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::new(vec![Violation::NotAnObject])),
    };

    let mut violations = Vec::new();
    reject_unknown_fields(obj, &["id", "_id"], &mut violations);

    let patch = BookPatch {
        title: optional_text(obj, "title", &mut violations),
        author: optional_text(obj, "author", &mut violations),
        year: check_year(field(obj, "year"), &mut violations),
        available: check_available(field(obj, "available"), &mut violations),
        genres: check_genres(field(obj, "genres"), &mut violations),
        rating: check_rating(field(obj, "rating"), &mut violations),
        stock: check_stock(field(obj, "stock"), &mut violations),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError::new(violations))
    }
}

/// A field is present iff the key exists and the value is not `null`.
fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

fn reject_unknown_fields(
    obj: &Map<String, Value>,
    stripped: &[&str],
    violations: &mut Vec<Violation>,
) {
    for key in obj.keys() {
        if stripped.contains(&key.as_str()) {
            continue;
        }
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            violations.push(Violation::UnknownField(key.clone()));
        }
    }
}

fn required_text(
    obj: &Map<String, Value>,
    key: &str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match field(obj, key).and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            violations.push(Violation::MissingRequiredField(key.to_string()));
            None
        }
    }
}

fn optional_text(
    obj: &Map<String, Value>,
    key: &str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    let value = field(obj, key)?;
    match value.as_str() {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            violations.push(Violation::MissingRequiredField(key.to_string()));
            None
        }
    }
}

fn check_year(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<i64> {
    let value = value?;
    match value.as_i64() {
        Some(year) if year >= 1800 => Some(year),
        _ => {
            violations.push(Violation::InvalidYear);
            None
        }
    }
}

fn check_rating(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<f64> {
    let value = value?;
    match value.as_f64() {
        Some(rating) if rating.is_finite() && (0.0..=5.0).contains(&rating) => Some(rating),
        _ => {
            violations.push(Violation::InvalidRating);
            None
        }
    }
}

fn check_genres(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<Vec<String>> {
    let value = value?;
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => {
            violations.push(Violation::InvalidGenres);
            return None;
        }
    };

    let mut genres = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_str() {
            Some(tag) => genres.push(tag.to_string()),
            None => {
                violations.push(Violation::InvalidGenres);
                return None;
            }
        }
    }
    Some(genres)
}

fn check_available(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<bool> {
    let value = value?;
    match value.as_bool() {
        Some(available) => Some(available),
        None => {
            violations.push(Violation::InvalidAvailable);
            None
        }
    }
}

fn check_stock(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<f64> {
    let value = value?;
    match value.as_f64() {
        Some(stock) if stock.is_finite() => Some(stock),
        _ => {
            violations.push(Violation::InvalidStock);
            None
        }
    }
}
