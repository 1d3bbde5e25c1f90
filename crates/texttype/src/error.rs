//! Error types for token classification and validation.
//!
//! The boolean and enum-returning operations never surface these; they exist
//! so callers that want a reason (e.g. to show "no valid type found" to a
//! user) can get one from [`crate::validate::validate_text`].

use thiserror::Error;

use crate::model::{TextType, TextTypeSpecific};

/// Error produced by the date-time grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DateTimeParseError {
    pub message: String,
}

impl DateTimeParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unknown name passed to `TextType::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text type: {name:?}")]
pub struct ParseTextTypeError {
    pub name: String,
}

/// Unknown name passed to `DateFormat::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date format {name:?} (expected \"loose\" or \"strict\")")]
pub struct ParseDateFormatError {
    pub name: String,
}

/// Reason a token was rejected for a requested type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("token is empty")]
    Empty,

    #[error("token length {len} exceeds limit {max}")]
    TooLong { len: usize, max: usize },

    #[error("token shape is not numeric")]
    Unrecognized,

    #[error("value {value} outside bounds [{lower}, {upper}]")]
    OutOfRange { value: f64, lower: f64, upper: f64 },

    #[error("token shaped as {found:?} does not match requested {expected}")]
    TypeMismatch {
        expected: TextType,
        found: TextTypeSpecific,
    },

    #[error("negative hex values are not accepted")]
    NegativeHex,

    #[error("hex token length {len} exceeds maximum {max}")]
    HexTooLong { len: usize, max: usize },

    #[error("token is not a valid {expected}")]
    Malformed { expected: TextType },

    #[error("invalid date-time: {0}")]
    DateTime(#[from] DateTimeParseError),

    #[error("no type requested")]
    Unassigned,
}
