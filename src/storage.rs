//! Helpers for storing fuzzy dates as sortable text columns.
//!
//! A stored value is either the canonical encoding or "no value", where no
//! value may be spelled as a missing column or as an empty string. Both
//! spellings are treated the same, and neither takes part in ordering.

use std::cmp::Ordering;

use crate::FuzzyDate;
use crate::error::Result;

/// Outcome of comparing two stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageOrdering {
    Less,
    Equal,
    Greater,
    /// At least one side holds no value.
    Incomparable,
}

impl StorageOrdering {
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Incomparable => None,
        }
    }
}

impl From<Ordering> for StorageOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// Reads a stored column. A missing column and `""` both give the empty value.
///
/// # Errors
/// Any error [`FuzzyDate::from_text`] reports for non-empty text.
pub fn from_stored(value: Option<&str>) -> Result<FuzzyDate> {
    match value.map(str::trim) {
        None | Some("") => Ok(FuzzyDate::empty()),
        Some(text) => FuzzyDate::from_text(text),
    }
}

/// The column value to write: the canonical encoding, or `None` for the empty value.
pub fn to_stored(date: &FuzzyDate) -> Option<&str> {
    (!date.is_empty()).then(|| date.as_str())
}

/// True for a missing value or the empty placeholder.
pub fn is_null(value: Option<&FuzzyDate>) -> bool {
    value.is_none_or(FuzzyDate::is_empty)
}

/// Compares two stored values by their canonical encodings.
pub fn compare(left: Option<&FuzzyDate>, right: Option<&FuzzyDate>) -> StorageOrdering {
    match (left, right) {
        (Some(l), Some(r)) if !l.is_empty() && !r.is_empty() => l.cmp(r).into(),
        _ => StorageOrdering::Incomparable,
    }
}

/// Equality filter. Two missing values match each other.
pub fn eq(left: Option<&FuzzyDate>, right: Option<&FuzzyDate>) -> bool {
    match (is_null(left), is_null(right)) {
        (true, true) => true,
        (false, false) => compare(left, right) == StorageOrdering::Equal,
        _ => false,
    }
}

pub fn lt(left: Option<&FuzzyDate>, right: Option<&FuzzyDate>) -> bool {
    compare(left, right) == StorageOrdering::Less
}

pub fn le(left: Option<&FuzzyDate>, right: Option<&FuzzyDate>) -> bool {
    matches!(compare(left, right), StorageOrdering::Less | StorageOrdering::Equal)
}

pub fn gt(left: Option<&FuzzyDate>, right: Option<&FuzzyDate>) -> bool {
    compare(left, right) == StorageOrdering::Greater
}

pub fn ge(left: Option<&FuzzyDate>, right: Option<&FuzzyDate>) -> bool {
    matches!(compare(left, right), StorageOrdering::Greater | StorageOrdering::Equal)
}
