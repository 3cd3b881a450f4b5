//! Error types for building and converting fuzzy dates.

use thiserror::Error;

/// Everything that can go wrong while constructing or converting a [`FuzzyDate`](crate::FuzzyDate).
///
/// Every variant is raised synchronously; no partially valid value is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzyDateError {
    /// More than one construction path was given, or an unknown field name was used.
    #[error("Conflicting arguments: {0}")]
    ConflictingArguments(String),

    /// Text does not match the fuzzy date grammar.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Day without month, a partial time block, or a time block without a full date.
    #[error("Incomplete components: {0}")]
    IncompleteComponents(&'static str),

    /// A numeric component lies outside its permitted range.
    #[error("{component} {value} is out of range (must be {min}-{max})")]
    OutOfRange {
        component: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Year, month and day are plausible on their own but do not form a real date.
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i64, month: i64, day: i64 },

    /// Malformed zone syntax or a zone that cannot be resolved.
    #[error("Invalid timezone: {0:?}")]
    InvalidTimezone(String),

    /// The wall-clock time falls in a gap created by a DST transition.
    #[error("Local time {0} does not exist in zone {1}")]
    NonexistentLocalTime(String, String),

    /// A seed value of a type no construction path accepts.
    #[error("Unable to create a fuzzy date from {0}")]
    TypeMismatch(&'static str),
}

pub type Result<T> = std::result::Result<T, FuzzyDateError>;
