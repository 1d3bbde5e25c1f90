//! Character-class predicates over raw tokens.
//!
//! All scanners are ASCII-only: a non-ASCII character never counts as a
//! digit, hex digit or identifier character.

/// Returns true if `s` is non-empty and consists of `0`-`9` only.
pub fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` holds at most `max_nibbles` characters, all hex
/// digits. The empty string passes.
pub fn is_pure_hex(s: &str, max_nibbles: usize) -> bool {
    s.len() <= max_nibbles && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns true for `0x`/`0X` followed by one or more hex digits.
pub fn is_hex(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() > 2
        && bytes[0] == b'0'
        && matches!(bytes[1], b'x' | b'X')
        && bytes[2..].iter().all(|b| b.is_ascii_hexdigit())
}

/// Returns true if `s` is digits with a single `.`, after an optional
/// leading `-`.
///
/// With `strict == false` a dot-free run of digits is accepted as well.
/// More than one dot, or any character other than a digit or `.`, fails.
pub fn is_float_or_double_by_dot(s: &str, strict: bool) -> bool {
    let bytes = s.as_bytes();
    let start = usize::from(bytes.first() == Some(&b'-'));
    if bytes.len() <= start {
        return false;
    }

    let mut dots = 0usize;
    for &b in &bytes[start..] {
        match b {
            b'0'..=b'9' => {}
            b'.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }

    (!strict && dots == 0) || (dots == 1 && bytes.len() > 1)
}

/// Returns true for a variable name: a letter, `_` or `@`, then
/// `[a-zA-Z0-9_]*`.
pub fn is_var(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'@' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Returns true if `s` is longer than two characters and wrapped in `"`.
pub fn is_quoted_text(s: &str) -> bool {
    s.len() > 2 && s.starts_with('"') && s.ends_with('"')
}

/// Returns true for one of `+ - * / % ^`.
pub fn is_operator_sign(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '^')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert!(is_digits_only("0"));
        assert!(is_digits_only("0123456789"));
        assert!(!is_digits_only(""));
        assert!(!is_digits_only("-1"));
        assert!(!is_digits_only("1.0"));
        assert!(!is_digits_only("１２")); // fullwidth digits
    }

    #[test]
    fn test_pure_hex() {
        assert!(is_pure_hex("0a", 2));
        assert!(is_pure_hex("F", 2));
        assert!(!is_pure_hex("abc", 2));
        assert!(is_pure_hex("abc", 4));
        assert!(!is_pure_hex("0g", 2));
        assert!(is_pure_hex("", 2));
        assert!(is_pure_hex("", 0));
    }

    #[test]
    fn test_hex() {
        assert!(is_hex("0x1A2B"));
        assert!(is_hex("0Xff"));
        assert!(!is_hex("1A2B"));
        assert!(!is_hex("0x"));
        assert!(!is_hex("0x1G"));
        assert!(!is_hex("-0x1"));
    }

    #[test]
    fn test_float_by_dot() {
        assert!(is_float_or_double_by_dot("1.5", true));
        assert!(is_float_or_double_by_dot("-1.5", true));
        assert!(is_float_or_double_by_dot(".5", true));
        assert!(is_float_or_double_by_dot("5.", true));
        assert!(!is_float_or_double_by_dot("15", true));
        assert!(is_float_or_double_by_dot("15", false));
        assert!(!is_float_or_double_by_dot("1.2.3", false));
        assert!(!is_float_or_double_by_dot(".", true));
        assert!(!is_float_or_double_by_dot("1e5", false));
        assert!(!is_float_or_double_by_dot("-", false));
        assert!(!is_float_or_double_by_dot("", false));
    }

    #[test]
    fn test_var() {
        assert!(is_var("x"));
        assert!(is_var("_tmp1"));
        assert!(is_var("@counter"));
        assert!(!is_var("1abc"));
        assert!(!is_var("a-b"));
        assert!(!is_var("a@b"));
        assert!(!is_var(""));
    }

    #[test]
    fn test_quoted_text() {
        assert!(is_quoted_text("\"abc\""));
        assert!(is_quoted_text("\"a\""));
        assert!(!is_quoted_text("\"\""));
        assert!(!is_quoted_text("\"abc"));
        assert!(!is_quoted_text("abc"));
    }

    #[test]
    fn test_operator_sign() {
        for c in ['+', '-', '*', '/', '%', '^'] {
            assert!(is_operator_sign(c));
        }
        assert!(!is_operator_sign('='));
        assert!(!is_operator_sign('x'));
    }
}
