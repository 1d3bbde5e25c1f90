//! Default bounds and fixed caps used during validation.

/// Default inclusive lower bound for numeric and date-time values.
pub const DEFAULT_LOWER_LIMIT: f64 = -1e10;

/// Default inclusive upper bound for numeric and date-time values.
pub const DEFAULT_UPPER_LIMIT: f64 = 1e10;

/// Default maximum token length, in characters.
pub const DEFAULT_TEXT_LENGTH_LIMIT: usize = 1000;

/// Longest accepted hex token: `0x` plus 8 hex digits.
pub const MAX_HEX_TOKEN_LEN: usize = 10;

/// Nibbles allowed per token of a spaced hex string (one byte).
pub const DEFAULT_SPACED_HEX_NIBBLES: usize = 2;

/// Exact length of a `YYYY-MM-DD/hh:mm:ss` token, also the length the
/// strict generic grammar demands.
pub const JAVA_DATETIME_LEN: usize = 19;
