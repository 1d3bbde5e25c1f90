//! Utility modules for texttype.

pub mod datetime;

pub use datetime::{
    format_java_datetime, parse_generic_datetime, parse_java_datetime, CalendarDateTime,
    REFERENCE_EPOCH_UNIX_SECONDS,
};
