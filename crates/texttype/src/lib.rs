//! texttype: classify and validate free-form value tokens.
//!
//! Given a token typed by a user (into a value editor, a script, a config
//! field), this crate answers two questions:
//! - is this token valid as type `T` under these bounds?
//! - with no declared type, which type fits it best?
//!
//! # Quick Start
//!
//! ```rust
//! use texttype::{check_text_validity, suggest_text_type, TextType, ValidationOptions};
//!
//! let opts = ValidationOptions::new().with_bounds(0.0, 255.0);
//! assert!(check_text_validity("0xFF", TextType::Hex, &opts));
//! assert!(!check_text_validity("-0xFF", TextType::Hex, &opts));
//!
//! assert_eq!(suggest_text_type("123", false), TextType::Integer);
//! assert_eq!(suggest_text_type("192.168.1.1", false), TextType::TcpIp);
//! assert_eq!(suggest_text_type("NOW+30", false), TextType::TimeDateNow);
//! ```
//!
//! # Modules
//!
//! - [`model`]: `TextType`, `TextTypeSpecific`, `ValidationOptions`
//! - [`scan`]: character-class predicates
//! - [`validate`]: shape analysis, per-type validation and format validators
//! - [`resolve`]: candidate lists and type suggestion
//! - [`util`]: date-time grammars and the reference-epoch conversion
//! - [`error`]: error types
//! - [`limits`]: default bounds and fixed caps
//!
//! # Types
//!
//! | Type | Accepts |
//! |---|---|
//! | `Integer` | `-?[0-9]+` |
//! | `Float` | `-?[0-9]*\.[0-9]*` with at least one digit, or an integer |
//! | `Hex` | `0x` + 1..=8 hex digits (never negative) |
//! | `TimeDateJava` | `YYYY-MM-DD/hh:mm:ss` |
//! | `TimeDateGeneric` | ISO-like or `M/D/YYYY` dates, optional time and zone |
//! | `TimeDateNow` | `NOW`, `NOW+n`, `NOW-n` |
//! | `TcpIp` | dotted-quad IPv4 |
//! | `TextString` | any non-empty text up to the length limit |
//! | `SpacedHexString` | space-separated hex bytes (`0x`/`h` optional) |
//!
//! Date-times are bounded as whole seconds since 1957-12-31 23:59:25.
//!
//! # Failure
//!
//! Nothing here panics on malformed input. Booleans, `Unrecognized`,
//! `Unassigned` and `None` are the negative results;
//! [`validate::validate_text`] adds a reason.

pub mod error;
pub mod limits;
pub mod model;
pub mod resolve;
pub mod scan;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{DateTimeParseError, ParseDateFormatError, ParseTextTypeError, ValidationError};
pub use model::{DateFormat, TextType, TextTypeSpecific, ValidationOptions};
pub use resolve::{
    candidate_text_types, get_text_type_list, suggest_text_type, suggest_text_type_specific,
    suggest_text_type_with,
};
pub use validate::{
    check_text_type_specific, check_text_validity, check_text_validity_in, validate_text,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
