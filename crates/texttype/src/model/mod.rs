//! Data model for token classification.
//!
//! - [`TextType`]: the coarse type a caller declares or offers as a candidate
//! - [`TextTypeSpecific`]: the fine-grained outcome of shape analysis
//! - [`ValidationOptions`]: per-call bounds, length limit and date strictness

pub mod options;
pub mod text_type;

pub use options::{DateFormat, ValidationOptions};
pub use text_type::{TextType, TextTypeSpecific};
