//! Per-call validation parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDateFormatError;
use crate::limits::{DEFAULT_LOWER_LIMIT, DEFAULT_TEXT_LENGTH_LIMIT, DEFAULT_UPPER_LIMIT};

/// Strictness of the generic date-time grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// Any text the generic grammar accepts.
    #[default]
    Loose,
    /// Generic grammar, and the text must be exactly 19 characters.
    Strict,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Loose => write!(f, "loose"),
            DateFormat::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = ParseDateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("loose") {
            Ok(DateFormat::Loose)
        } else if name.eq_ignore_ascii_case("strict") {
            Ok(DateFormat::Strict)
        } else {
            Err(ParseDateFormatError {
                name: s.to_string(),
            })
        }
    }
}

/// Bounds, length cap and date strictness for one validation call.
///
/// Nothing here is stored between calls; build one per call site or share a
/// constant. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationOptions {
    /// Inclusive lower bound for numeric values and reference-epoch seconds.
    pub lower_limit: f64,
    /// Inclusive upper bound for numeric values and reference-epoch seconds.
    pub upper_limit: f64,
    /// Maximum token length in characters (numeric and text types).
    pub text_length_limit: usize,
    /// Strictness of the generic date-time grammar.
    pub format: DateFormat,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            lower_limit: DEFAULT_LOWER_LIMIT,
            upper_limit: DEFAULT_UPPER_LIMIT,
            text_length_limit: DEFAULT_TEXT_LENGTH_LIMIT,
            format: DateFormat::Loose,
        }
    }
}

impl ValidationOptions {
    /// Creates options with the default bounds, length limit and loose dates.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, lower_limit: f64, upper_limit: f64) -> Self {
        self.lower_limit = lower_limit;
        self.upper_limit = upper_limit;
        self
    }

    pub fn with_text_length_limit(mut self, text_length_limit: usize) -> Self {
        self.text_length_limit = text_length_limit;
        self
    }

    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns true if `value` lies within the inclusive bounds. NaN never does.
    pub fn in_bounds(&self, value: f64) -> bool {
        value >= self.lower_limit && value <= self.upper_limit
    }
}
