//! Format validators for the non-numeric types.

use crate::error::DateTimeParseError;
use crate::limits::JAVA_DATETIME_LEN;
use crate::model::DateFormat;
use crate::scan::{is_digits_only, is_pure_hex, is_quoted_text};
use crate::util::datetime::{parse_generic_datetime, parse_java_datetime, CalendarDateTime};

/// Parses with the generic grammar; `Strict` also demands exactly 19 characters.
pub(crate) fn parse_date_with_format(
    s: &str,
    format: DateFormat,
) -> Result<CalendarDateTime, DateTimeParseError> {
    let dt = parse_generic_datetime(s)?;
    if format == DateFormat::Strict && s.chars().count() != JAVA_DATETIME_LEN {
        return Err(DateTimeParseError::new(format!(
            "Strict date-time must be {} characters: {}",
            JAVA_DATETIME_LEN, s
        )));
    }
    Ok(dt)
}

/// Returns true if `s` parses with the generic date-time grammar.
pub fn check_date_format_validity(s: &str, format: DateFormat) -> bool {
    parse_date_with_format(s, format).is_ok()
}

/// Returns true for a calendar-valid `YYYY-MM-DD/hh:mm:ss` token.
pub fn check_date_java_format_validity(s: &str) -> bool {
    parse_java_datetime(s).is_ok()
}

/// Returns true for `NOW`, or `NOW` followed by a sign and one or more
/// digits. The `NOW` prefix is case-insensitive.
pub fn is_now_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || !bytes[..3].eq_ignore_ascii_case(b"NOW") {
        return false;
    }

    match bytes.len() {
        3 => true,
        // A sign with nothing after it
        4 => false,
        _ => matches!(bytes[3], b'+' | b'-') && is_digits_only(&s[4..]),
    }
}

/// Returns true for a dotted quad whose four groups are decimal numbers in
/// `0..=255`.
pub fn check_tcp_ip_format_validity(s: &str) -> bool {
    let mut groups = 0;
    for group in s.split('.') {
        groups += 1;
        if groups > 4 || !is_digits_only(group) {
            return false;
        }
        match group.parse::<u32>() {
            Ok(octet) if octet <= 255 => {}
            _ => return false,
        }
    }
    groups == 4
}

/// Checks one byte token: optional `0x`/`0X` prefix, optional `h`/`H`
/// suffix, then up to `max_nibbles` hex digits. A bare prefix or suffix
/// leaves nothing and still counts as a byte.
fn is_spaced_hex_token(token: &str, max_nibbles: usize) -> bool {
    let token = token
        .strip_suffix('h')
        .or_else(|| token.strip_suffix('H'))
        .unwrap_or(token);
    let token = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    is_pure_hex(token, max_nibbles)
}

/// Returns true if `s` is one or more space-separated hex byte tokens.
///
/// Blank tokens (runs of spaces) are skipped; any other invalid token fails
/// the whole string.
pub fn is_spaced_hex_string(s: &str, max_nibbles: usize) -> bool {
    let mut tokens = s.split(' ').filter(|t| !t.trim().is_empty()).peekable();
    if tokens.peek().is_none() {
        return false;
    }
    tokens.all(|t| is_spaced_hex_token(t, max_nibbles))
}

/// Returns true if `s` is non-empty and at most `limit` characters. A
/// double-quoted token gets two extra characters for its quotes.
pub fn check_text_string_validity(s: &str, limit: usize) -> bool {
    if s.is_empty() {
        return false;
    }
    let limit = if is_quoted_text(s) {
        limit.saturating_add(2)
    } else {
        limit
    };
    s.chars().count() <= limit
}
