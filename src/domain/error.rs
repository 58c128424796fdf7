//! Validation errors raised by domain constructors and catalog lookups.

use thiserror::Error;

/// A rejected input value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty or blank")]
    BlankField { field: &'static str },

    #[error("duration must be a positive number of minutes (got {actual})")]
    NonPositiveDuration { actual: i64 },

    #[error("duration of {actual} minutes is out of range")]
    DurationOutOfRange { actual: i64 },

    #[error("unknown genre: {label:?}")]
    UnknownGenre { label: String },

    #[error("no playlist named {name:?}")]
    UnknownCollection { name: String },
}
