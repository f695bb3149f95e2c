//! Validation error types.
//!
//! A `ValidationError` carries the full list of violations found in one pass
//! over the payload, so a client can fix everything in a single round-trip.

use std::fmt;

/// One field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The payload is not a JSON object at all.
    NotAnObject,
    /// `title`/`author` absent, empty, or not a string.
    MissingRequiredField(String),
    /// `year` present but not an integer >= 1800.
    InvalidYear,
    /// `rating` present but not a number in [0, 5].
    InvalidRating,
    /// `genres` present but not a sequence of strings.
    InvalidGenres,
    /// `available` present but not a boolean.
    InvalidAvailable,
    /// `stock` present but not a number.
    InvalidStock,
    /// A field outside the book record schema.
    UnknownField(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAnObject => write!(f, "payload must be a JSON object"),
            Violation::MissingRequiredField(field) => {
                write!(f, "{} is required and must be a non-empty string", field)
            }
            Violation::InvalidYear => {
                write!(f, "year must be an integer greater than or equal to 1800")
            }
            Violation::InvalidRating => write!(f, "rating must be a number between 0 and 5"),
            Violation::InvalidGenres => write!(f, "genres must be a sequence of strings"),
            Violation::InvalidAvailable => write!(f, "available must be a boolean"),
            Violation::InvalidStock => write!(f, "stock must be a number"),
            Violation::UnknownField(field) => write!(f, "unknown field: {}", field),
        }
    }
}

/// A rejected payload, with every violation found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Whether a specific violation kind is present.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
