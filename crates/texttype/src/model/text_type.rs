//! Coarse and fine-grained token types.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseTextTypeError;

/// Type a caller declares or offers as a candidate.
///
/// Declaration order matters: it is the tie-break the suggesters use when a
/// token validates as more than one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TextType {
    Integer = 0,
    Float = 1,
    Hex = 2,
    /// `YYYY-MM-DD/hh:mm:ss`
    TimeDateJava = 3,
    TimeDateGeneric = 4,
    /// `NOW`, `NOW+<digits>`, `NOW-<digits>`
    TimeDateNow = 5,
    /// Dotted-quad IPv4 address.
    TcpIp = 6,
    TextString = 7,
    /// Space-separated hex bytes, e.g. `0a 0x0b 0ch`.
    SpacedHexString = 8,
    Unassigned = 9,
}

impl TextType {
    /// Every assignable type, in declaration order. Excludes `Unassigned`.
    pub const ALL: [TextType; 9] = [
        TextType::Integer,
        TextType::Float,
        TextType::Hex,
        TextType::TimeDateJava,
        TextType::TimeDateGeneric,
        TextType::TimeDateNow,
        TextType::TcpIp,
        TextType::TextString,
        TextType::SpacedHexString,
    ];

    /// Returns the canonical name used by `Display` and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            TextType::Integer => "Integer",
            TextType::Float => "Float",
            TextType::Hex => "Hex",
            TextType::TimeDateJava => "TimeDateJava",
            TextType::TimeDateGeneric => "TimeDateGeneric",
            TextType::TimeDateNow => "TimeDateNow",
            TextType::TcpIp => "TcpIp",
            TextType::TextString => "TextString",
            TextType::SpacedHexString => "SpacedHexString",
            TextType::Unassigned => "Unassigned",
        }
    }

    /// Whether this is one of the three shape-analysed numeric types.
    pub fn is_numeric(self) -> bool {
        matches!(self, TextType::Integer | TextType::Float | TextType::Hex)
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextType {
    type Err = ParseTextTypeError;

    /// Parses a type name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TextType::ALL
            .into_iter()
            .chain(std::iter::once(TextType::Unassigned))
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseTextTypeError {
                name: s.to_string(),
            })
    }
}

/// Outcome of shape analysis.
///
/// `Unrecognized` is the "no match" sentinel and is never a valid
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTypeSpecific {
    IntegerPositive,
    IntegerNegative,
    FloatPositive,
    FloatNegative,
    HexPositive,
    HexNegative,
    TimeDateJava,
    TimeDateGeneric,
    TimeDateNow,
    TcpIp,
    TextString,
    SpacedHexString,
    Unrecognized,
}

impl TextTypeSpecific {
    /// Returns the coarse type this outcome belongs to, or `None` for
    /// `Unrecognized`.
    pub fn text_type(self) -> Option<TextType> {
        match self {
            TextTypeSpecific::IntegerPositive | TextTypeSpecific::IntegerNegative => {
                Some(TextType::Integer)
            }
            TextTypeSpecific::FloatPositive | TextTypeSpecific::FloatNegative => {
                Some(TextType::Float)
            }
            TextTypeSpecific::HexPositive | TextTypeSpecific::HexNegative => Some(TextType::Hex),
            TextTypeSpecific::TimeDateJava => Some(TextType::TimeDateJava),
            TextTypeSpecific::TimeDateGeneric => Some(TextType::TimeDateGeneric),
            TextTypeSpecific::TimeDateNow => Some(TextType::TimeDateNow),
            TextTypeSpecific::TcpIp => Some(TextType::TcpIp),
            TextTypeSpecific::TextString => Some(TextType::TextString),
            TextTypeSpecific::SpacedHexString => Some(TextType::SpacedHexString),
            TextTypeSpecific::Unrecognized => None,
        }
    }

    /// Returns the specific outcome for a non-numeric type, whose mapping is
    /// one-to-one. Numeric types need shape analysis and return `None`.
    pub fn from_format_type(text_type: TextType) -> Option<TextTypeSpecific> {
        match text_type {
            TextType::TimeDateJava => Some(TextTypeSpecific::TimeDateJava),
            TextType::TimeDateGeneric => Some(TextTypeSpecific::TimeDateGeneric),
            TextType::TimeDateNow => Some(TextTypeSpecific::TimeDateNow),
            TextType::TcpIp => Some(TextTypeSpecific::TcpIp),
            TextType::TextString => Some(TextTypeSpecific::TextString),
            TextType::SpacedHexString => Some(TextTypeSpecific::SpacedHexString),
            TextType::Integer | TextType::Float | TextType::Hex | TextType::Unassigned => None,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != TextTypeSpecific::Unrecognized
    }

    /// Whether the token carried a leading `-`.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            TextTypeSpecific::IntegerNegative
                | TextTypeSpecific::FloatNegative
                | TextTypeSpecific::HexNegative
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_declaration_order() {
        for (i, t) in TextType::ALL.iter().enumerate() {
            assert_eq!(*t as usize, i);
        }
        assert!(!TextType::ALL.contains(&TextType::Unassigned));
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("float".parse::<TextType>().unwrap(), TextType::Float);
        assert_eq!(" TCPIP ".parse::<TextType>().unwrap(), TextType::TcpIp);
        assert_eq!(
            "SpacedHexString".parse::<TextType>().unwrap(),
            TextType::SpacedHexString
        );
        assert!("double".parse::<TextType>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for t in TextType::ALL {
            assert_eq!(t.to_string().parse::<TextType>().unwrap(), t);
        }
    }

    #[test]
    fn test_specific_maps_to_coarse() {
        assert_eq!(
            TextTypeSpecific::FloatNegative.text_type(),
            Some(TextType::Float)
        );
        assert_eq!(TextTypeSpecific::HexNegative.text_type(), Some(TextType::Hex));
        assert_eq!(TextTypeSpecific::Unrecognized.text_type(), None);
        assert!(!TextTypeSpecific::Unrecognized.is_recognized());
    }

    #[test]
    fn test_negative_variants() {
        assert!(TextTypeSpecific::IntegerNegative.is_negative());
        assert!(TextTypeSpecific::FloatNegative.is_negative());
        assert!(TextTypeSpecific::HexNegative.is_negative());
        assert!(!TextTypeSpecific::HexPositive.is_negative());
        assert!(!TextTypeSpecific::Unrecognized.is_negative());
        assert!(!TextTypeSpecific::TcpIp.is_negative());
    }

    #[test]
    fn test_format_types_map_one_to_one() {
        for t in TextType::ALL {
            match TextTypeSpecific::from_format_type(t) {
                Some(specific) => assert_eq!(specific.text_type(), Some(t)),
                None => assert!(t.is_numeric()),
            }
        }
    }
}
