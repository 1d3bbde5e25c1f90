//! Property tests for shape analysis, validation and suggestion.

use proptest::prelude::*;

use texttype::util::{format_java_datetime, parse_java_datetime};
use texttype::validate::{check_tcp_ip_format_validity, is_spaced_hex_string};
use texttype::{
    check_text_type_specific, check_text_validity, suggest_text_type, suggest_text_type_specific,
    TextType, TextTypeSpecific, ValidationOptions,
};

proptest! {
    #[test]
    fn digits_are_positive_integers(s in "[0-9]{1,10}") {
        prop_assert_eq!(
            check_text_type_specific(&s, TextType::Integer),
            TextTypeSpecific::IntegerPositive
        );
        prop_assert!(check_text_validity(&s, TextType::Integer, &ValidationOptions::default()));
        prop_assert_eq!(suggest_text_type(&s, false), TextType::Integer);
    }

    #[test]
    fn dotted_numbers_are_floats(neg in any::<bool>(), int in "[0-9]{1,8}", frac in "[0-9]{1,8}") {
        let s = format!("{}{}.{}", if neg { "-" } else { "" }, int, frac);
        let expected = if neg {
            TextTypeSpecific::FloatNegative
        } else {
            TextTypeSpecific::FloatPositive
        };
        prop_assert_eq!(check_text_type_specific(&s, TextType::Float), expected);
        prop_assert!(check_text_validity(&s, TextType::Float, &ValidationOptions::default()));
        prop_assert!(!check_text_validity(&s, TextType::Integer, &ValidationOptions::default()));
    }

    #[test]
    fn negative_hex_is_never_valid(digits in "[0-9a-fA-F]{1,8}", lower in -1e12f64..0.0, upper in 0.0f64..1e12) {
        let s = format!("-0x{}", digits);
        let opts = ValidationOptions::new().with_bounds(lower, upper);
        prop_assert_eq!(check_text_type_specific(&s, TextType::Hex), TextTypeSpecific::HexNegative);
        prop_assert!(!check_text_validity(&s, TextType::Hex, &opts));
    }

    #[test]
    fn short_hex_is_valid(digits in "[0-9a-fA-F]{1,8}") {
        let s = format!("0x{}", digits);
        prop_assert!(check_text_validity(&s, TextType::Hex, &ValidationOptions::default()));
    }

    #[test]
    fn dotted_quads_are_addresses(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
        let s = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert!(check_tcp_ip_format_validity(&s));
        prop_assert_eq!(suggest_text_type(&s, true), TextType::TcpIp);
    }

    #[test]
    fn octet_overflow_is_rejected(a in any::<u8>(), big in 256u32..100_000) {
        let s = format!("{}.{}.{}.{}", a, a, a, big);
        prop_assert!(!check_tcp_ip_format_validity(&s));
    }

    #[test]
    fn byte_lists_are_spaced_hex(bytes in proptest::collection::vec(any::<u8>(), 1..16)) {
        let s = bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ");
        prop_assert!(is_spaced_hex_string(&s, 2));
        prop_assert!(check_text_validity(&s, TextType::SpacedHexString, &ValidationOptions::default()));
    }

    #[test]
    fn java_datetime_roundtrips(seconds in 0i64..4_000_000_000) {
        let text = format_java_datetime(seconds).unwrap();
        let parsed = parse_java_datetime(&text).unwrap();
        prop_assert_eq!(parsed.reference_epoch_seconds(), seconds);
        prop_assert!(check_text_validity(&text, TextType::TimeDateJava, &ValidationOptions::default()));
    }

    #[test]
    fn suggested_specific_validates(s in "\\PC{0,24}") {
        let specific = suggest_text_type_specific(&s, false);
        if let Some(text_type) = specific.text_type() {
            prop_assert!(check_text_validity(&s, text_type, &ValidationOptions::default()));
        }
    }

    #[test]
    fn suggested_specific_validates_numeric_like(s in "-?(0x)?[0-9a-fA-F.]{0,12}") {
        let specific = suggest_text_type_specific(&s, true);
        if let Some(text_type) = specific.text_type() {
            prop_assert!(check_text_validity(&s, text_type, &ValidationOptions::default()));
        }
    }

    #[test]
    fn suggestion_is_idempotent(s in "\\PC{0,24}", omit_text in any::<bool>()) {
        prop_assert_eq!(suggest_text_type(&s, omit_text), suggest_text_type(&s, omit_text));
        prop_assert_eq!(
            suggest_text_type_specific(&s, omit_text),
            suggest_text_type_specific(&s, omit_text)
        );
    }
}
