//! Picks a best-fit type for a token.
//!
//! Candidate lists are ordered and the first type that validates wins. With
//! no hints, [`TextType::ALL`] is the order, so an integer-shaped token is an
//! `Integer` even though it would also pass as a `Float`.
//!
//! All suggestions validate with [`ValidationOptions::default`].

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::model::{TextType, TextTypeSpecific, ValidationOptions};
use crate::validate::{check_text_type_specific, check_text_validity};

const TIME_DATE_CANDIDATES: &[TextType] = &[
    TextType::TimeDateJava,
    TextType::TimeDateNow,
    TextType::Hex,
];
const HEX_CANDIDATES: &[TextType] = &[TextType::Hex];
const TEXT_CANDIDATES: &[TextType] = &[TextType::TextString];
const SPACED_HEX_CANDIDATES: &[TextType] = &[TextType::SpacedHexString];

lazy_static! {
    /// Unit hint (upper-cased) to the candidates it starts the list with.
    static ref UNIT_CANDIDATES: FxHashMap<&'static str, &'static [TextType]> = {
        let mut units = FxHashMap::default();
        units.insert("UTC", TIME_DATE_CANDIDATES);
        units.insert("TIMEDATE", TIME_DATE_CANDIDATES);
        units.insert("HEX", HEX_CANDIDATES);
        units.insert("TEXT", TEXT_CANDIDATES);
        units.insert("SPACEDHEXSTRING", SPACED_HEX_CANDIDATES);
        units
    };
}

fn unit_candidates(unit: &str) -> Option<&'static [TextType]> {
    let key = unit.trim().to_ascii_uppercase();
    UNIT_CANDIDATES.get(key.as_str()).copied()
}

/// Builds the ordered candidate list for a field from its unit and declared
/// data type. Both hints are case-insensitive and may be blank.
///
/// ```text
/// unit UTC | TIMEDATE  -> TimeDateJava, TimeDateNow, Hex
/// unit HEX             -> Hex
/// unit TEXT            -> TextString
/// unit SPACEDHEXSTRING -> SpacedHexString
/// other / blank        -> Hex, unless the data type is "float"
/// ```
///
/// A `"float"` data type then appends `Float`, and `Integer` closes every
/// list that does not already hold `SpacedHexString`.
pub fn get_text_type_list(unit: &str, declared_type: &str) -> Vec<TextType> {
    let is_float = declared_type.trim().eq_ignore_ascii_case("float");

    let mut list = match unit_candidates(unit) {
        Some(candidates) => candidates.to_vec(),
        None if is_float => Vec::new(),
        None => vec![TextType::Hex],
    };

    if is_float {
        list.push(TextType::Float);
    }
    if !list.contains(&TextType::SpacedHexString) {
        list.push(TextType::Integer);
    }

    trace!(unit, declared_type, candidates = ?list, "built candidate list");
    list
}

/// Types in declaration order that `token` validates as.
fn valid_types<'a>(
    token: &'a str,
    omit_text: bool,
    options: &'a ValidationOptions,
) -> impl Iterator<Item = TextType> + 'a {
    TextType::ALL
        .into_iter()
        .filter(move |&t| !(omit_text && t == TextType::TextString))
        .filter(move |&t| check_text_validity(token, t, options))
}

/// Every type `token` validates as, in declaration order. `None` for a blank
/// token.
pub fn candidate_text_types(token: &str, omit_text: bool) -> Option<Vec<TextType>> {
    if token.trim().is_empty() {
        return None;
    }
    let options = ValidationOptions::default();
    Some(valid_types(token, omit_text, &options).collect())
}

/// Returns the first type in declaration order that `token` validates as,
/// or `Unassigned`.
pub fn suggest_text_type(token: &str, omit_text: bool) -> TextType {
    let options = ValidationOptions::default();
    let suggested = valid_types(token, omit_text, &options)
        .next()
        .unwrap_or(TextType::Unassigned);
    trace!(token, suggested = %suggested, "suggested text type");
    suggested
}

/// Like [`suggest_text_type`], but a candidate list containing `Float` makes
/// any float-shaped token a `Float`.
///
/// Float shape is judged with `Float` requested, so plain digits count.
pub fn suggest_text_type_with(token: &str, candidates: &[TextType], omit_text: bool) -> TextType {
    if candidates.contains(&TextType::Float) {
        let specific = check_text_type_specific(token.trim(), TextType::Float);
        if matches!(
            specific,
            TextTypeSpecific::FloatPositive | TextTypeSpecific::FloatNegative
        ) {
            trace!(token, "float hint applied");
            return TextType::Float;
        }
    }
    suggest_text_type(token, omit_text)
}

/// Returns the most specific outcome for `token`: the first valid type,
/// refined by shape analysis for the numeric types.
pub fn suggest_text_type_specific(token: &str, omit_text: bool) -> TextTypeSpecific {
    let Some(candidates) = candidate_text_types(token, omit_text) else {
        return TextTypeSpecific::Unrecognized;
    };

    match candidates.first() {
        Some(&t) if t.is_numeric() => check_text_type_specific(token.trim(), t),
        Some(&t) => {
            TextTypeSpecific::from_format_type(t).unwrap_or(TextTypeSpecific::Unrecognized)
        }
        None => TextTypeSpecific::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_for_time_units() {
        let expected = vec![
            TextType::TimeDateJava,
            TextType::TimeDateNow,
            TextType::Hex,
            TextType::Integer,
        ];
        assert_eq!(get_text_type_list("UTC", ""), expected);
        assert_eq!(get_text_type_list("timedate", "int"), expected);
    }

    #[test]
    fn test_list_for_single_units() {
        assert_eq!(
            get_text_type_list("HEX", ""),
            vec![TextType::Hex, TextType::Integer]
        );
        assert_eq!(
            get_text_type_list("Text", ""),
            vec![TextType::TextString, TextType::Integer]
        );
        assert_eq!(
            get_text_type_list("SpacedHexString", ""),
            vec![TextType::SpacedHexString]
        );
        assert_eq!(
            get_text_type_list("SPACEDHEXSTRING", "float"),
            vec![TextType::SpacedHexString, TextType::Float]
        );
    }

    #[test]
    fn test_list_without_unit() {
        assert_eq!(
            get_text_type_list("", ""),
            vec![TextType::Hex, TextType::Integer]
        );
        assert_eq!(
            get_text_type_list("meters", "int32"),
            vec![TextType::Hex, TextType::Integer]
        );
        assert_eq!(
            get_text_type_list("", "FLOAT"),
            vec![TextType::Float, TextType::Integer]
        );
        assert_eq!(
            get_text_type_list("UTC", "float"),
            vec![
                TextType::TimeDateJava,
                TextType::TimeDateNow,
                TextType::Hex,
                TextType::Float,
                TextType::Integer,
            ]
        );
    }

    #[test]
    fn test_candidates_blank_is_none() {
        assert_eq!(candidate_text_types("", false), None);
        assert_eq!(candidate_text_types("  ", true), None);
    }

    #[test]
    fn test_candidates_in_declaration_order() {
        assert_eq!(
            candidate_text_types("123", false),
            Some(vec![TextType::Integer, TextType::Float, TextType::TextString])
        );
        assert_eq!(
            candidate_text_types("123", true),
            Some(vec![TextType::Integer, TextType::Float])
        );
        assert_eq!(
            candidate_text_types("0a 0b", true),
            Some(vec![TextType::SpacedHexString])
        );
    }

    #[test]
    fn test_suggest_declaration_order() {
        assert_eq!(suggest_text_type("123", false), TextType::Integer);
        assert_eq!(suggest_text_type("1.5", false), TextType::Float);
        assert_eq!(suggest_text_type("0x1F", false), TextType::Hex);
        assert_eq!(suggest_text_type("abc", false), TextType::TextString);
        assert_eq!(suggest_text_type("abc", true), TextType::Unassigned);
        assert_eq!(suggest_text_type("", false), TextType::Unassigned);
    }

    #[test]
    fn test_suggest_with_float_hint() {
        assert_eq!(
            suggest_text_type_with("1.5", &[TextType::Integer, TextType::Float], false),
            TextType::Float
        );
        // Plain digits are float-shaped once Float is requested
        assert_eq!(
            suggest_text_type_with("123", &[TextType::Float, TextType::Integer], false),
            TextType::Float
        );
        assert_eq!(
            suggest_text_type_with("123", &[TextType::Hex, TextType::Integer], false),
            TextType::Integer
        );
        assert_eq!(
            suggest_text_type_with("0x10", &[TextType::Float], false),
            TextType::Hex
        );
    }

    #[test]
    fn test_suggest_specific() {
        assert_eq!(
            suggest_text_type_specific("-12", false),
            TextTypeSpecific::IntegerNegative
        );
        assert_eq!(
            suggest_text_type_specific("-1.25", false),
            TextTypeSpecific::FloatNegative
        );
        assert_eq!(
            suggest_text_type_specific("0xBEEF", false),
            TextTypeSpecific::HexPositive
        );
        assert_eq!(
            suggest_text_type_specific("NOW-5", false),
            TextTypeSpecific::TimeDateNow
        );
        assert_eq!(
            suggest_text_type_specific("-0xBEEF", false),
            TextTypeSpecific::TextString
        );
        assert_eq!(
            suggest_text_type_specific("-0xBEEF", true),
            TextTypeSpecific::Unrecognized
        );
        assert_eq!(
            suggest_text_type_specific("", false),
            TextTypeSpecific::Unrecognized
        );
    }
}
