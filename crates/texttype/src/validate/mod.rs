//! Shape analysis and per-type validation of tokens.
//!
//! [`check_text_type_specific`] decides what a token looks like from its
//! characters alone. [`validate_text`] decides whether it is acceptable as a
//! requested [`TextType`] under a set of [`ValidationOptions`], and says why
//! not when it isn't. [`check_text_validity`] is the boolean form.
//!
//! Negative hex is recognised by shape but never accepted as a `Hex` value.

pub mod format;

use tracing::trace;

use crate::error::ValidationError;
use crate::limits::{DEFAULT_SPACED_HEX_NIBBLES, MAX_HEX_TOKEN_LEN};
use crate::model::{TextType, TextTypeSpecific, ValidationOptions};
use crate::scan::{is_digits_only, is_float_or_double_by_dot, is_hex};
use crate::util::datetime::parse_java_datetime;

pub use format::{
    check_date_format_validity, check_date_java_format_validity, check_tcp_ip_format_validity,
    check_text_string_validity, is_now_valid, is_spaced_hex_string,
};

/// Classifies a token's numeric shape.
///
/// A leading `-` is stripped and remembered. What remains must start with a
/// digit or `.`, and is tested as hex, then as a single-dot float, then as
/// plain digits. Plain digits count as a float when `requested` is
/// [`TextType::Float`].
pub fn check_text_type_specific(s: &str, requested: TextType) -> TextTypeSpecific {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    match body.as_bytes().first() {
        Some(b) if b.is_ascii_digit() || *b == b'.' => {}
        _ => return TextTypeSpecific::Unrecognized,
    }

    let signed = |positive, negative_variant| {
        if negative {
            negative_variant
        } else {
            positive
        }
    };

    if is_hex(body) {
        signed(TextTypeSpecific::HexPositive, TextTypeSpecific::HexNegative)
    } else if is_float_or_double_by_dot(body, true) {
        signed(TextTypeSpecific::FloatPositive, TextTypeSpecific::FloatNegative)
    } else if is_digits_only(body) {
        if requested == TextType::Float {
            signed(TextTypeSpecific::FloatPositive, TextTypeSpecific::FloatNegative)
        } else {
            signed(
                TextTypeSpecific::IntegerPositive,
                TextTypeSpecific::IntegerNegative,
            )
        }
    } else {
        TextTypeSpecific::Unrecognized
    }
}

/// Returns true if `token` is acceptable as `requested`.
///
/// Equivalent to `validate_text(token, requested, options).is_ok()`.
pub fn check_text_validity(token: &str, requested: TextType, options: &ValidationOptions) -> bool {
    validate_text(token, requested, options).is_ok()
}

/// Returns the first of `candidates` that `token` validates as, or `None`
/// (the unassigned outcome) if none does.
pub fn check_text_validity_in(
    token: &str,
    candidates: &[TextType],
    options: &ValidationOptions,
) -> Option<TextType> {
    candidates
        .iter()
        .copied()
        .find(|&t| check_text_validity(token, t, options))
}

/// Validates `token` as `requested`, returning the reason on rejection.
///
/// The token is trimmed first. Bounds apply to numeric values and to
/// date-times converted to reference-epoch seconds; the length limit applies
/// to numeric and text tokens. `TcpIp`, `TimeDateNow` and `SpacedHexString`
/// ignore both.
pub fn validate_text(
    token: &str,
    requested: TextType,
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    let s = token.trim();
    let result = validate_trimmed(s, requested, options);
    if let Err(err) = &result {
        trace!(token = s, requested = %requested, reason = %err, "token rejected");
    }
    result
}

fn validate_trimmed(
    s: &str,
    requested: TextType,
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    match requested {
        TextType::TcpIp => ensure(format::check_tcp_ip_format_validity(s), requested),
        TextType::TextString => validate_text_string(s, options.text_length_limit),
        TextType::TimeDateJava => {
            let dt = parse_java_datetime(s)?;
            ensure_in_bounds(dt.reference_epoch_seconds() as f64, options)
        }
        TextType::TimeDateGeneric => {
            let dt = format::parse_date_with_format(s, options.format)?;
            ensure_in_bounds(dt.reference_epoch_seconds() as f64, options)
        }
        TextType::TimeDateNow => ensure(format::is_now_valid(s), requested),
        TextType::SpacedHexString => ensure(
            format::is_spaced_hex_string(s, DEFAULT_SPACED_HEX_NIBBLES),
            requested,
        ),
        TextType::Integer | TextType::Float | TextType::Hex => {
            validate_numeric(s, requested, options)
        }
        TextType::Unassigned => Err(ValidationError::Unassigned),
    }
}

fn ensure(valid: bool, expected: TextType) -> Result<(), ValidationError> {
    if valid {
        Ok(())
    } else {
        Err(ValidationError::Malformed { expected })
    }
}

fn ensure_in_bounds(value: f64, options: &ValidationOptions) -> Result<(), ValidationError> {
    if options.in_bounds(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            value,
            lower: options.lower_limit,
            upper: options.upper_limit,
        })
    }
}

fn validate_text_string(s: &str, limit: usize) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty);
    }
    if format::check_text_string_validity(s, limit) {
        return Ok(());
    }
    let max = if crate::scan::is_quoted_text(s) {
        limit.saturating_add(2)
    } else {
        limit
    };
    Err(ValidationError::TooLong {
        len: s.chars().count(),
        max,
    })
}

fn validate_numeric(
    s: &str,
    requested: TextType,
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    let len = s.chars().count();
    if len > options.text_length_limit {
        return Err(ValidationError::TooLong {
            len,
            max: options.text_length_limit,
        });
    }

    let specific = check_text_type_specific(s, requested);
    match specific {
        TextTypeSpecific::IntegerPositive
        | TextTypeSpecific::IntegerNegative
        | TextTypeSpecific::FloatPositive
        | TextTypeSpecific::FloatNegative => {
            let value: f64 = s
                .parse()
                .map_err(|_| ValidationError::Malformed { expected: requested })?;
            ensure_in_bounds(value, options)?;
            if specific.text_type() != Some(requested) {
                return Err(ValidationError::TypeMismatch {
                    expected: requested,
                    found: specific,
                });
            }
            Ok(())
        }
        TextTypeSpecific::HexPositive | TextTypeSpecific::HexNegative => {
            if specific.is_negative() {
                return Err(ValidationError::NegativeHex);
            }
            if requested != TextType::Hex {
                return Err(ValidationError::TypeMismatch {
                    expected: requested,
                    found: specific,
                });
            }
            if len > MAX_HEX_TOKEN_LEN {
                return Err(ValidationError::HexTooLong {
                    len,
                    max: MAX_HEX_TOKEN_LEN,
                });
            }
            let value = u64::from_str_radix(&s[2..], 16)
                .map_err(|_| ValidationError::Malformed { expected: requested })?;
            ensure_in_bounds(value as f64, options)
        }
        TextTypeSpecific::Unrecognized => Err(ValidationError::Unrecognized),
        other => Err(ValidationError::TypeMismatch {
            expected: requested,
            found: other,
        }),
    }
}
