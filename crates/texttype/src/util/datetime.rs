//! Date-time grammars and the reference-epoch conversion.
//!
//! Two grammars are recognised:
//! - Java style: exactly `YYYY-MM-DD/hh:mm:ss`
//! - Generic: ISO-like and US-style dates with an optional time and zone
//!
//! ```text
//! datetime := date [ sep time [ zone ] ]
//! date     := YYYY '-' M '-' D | YYYY '/' M '/' D | M '/' D '/' YYYY
//! sep      := 'T' | 't' | ' '+
//! time     := h ':' mm [ ':' ss [ '.' fraction ] ]
//! zone     := 'Z' | 'z' | ('+'|'-') hh ':' mm
//! ```
//!
//! Parsed values convert to whole seconds since 1957-12-31 23:59:25, the
//! reference epoch stored values are bounded against.

use crate::error::DateTimeParseError;
use crate::limits::JAVA_DATETIME_LEN;
use crate::scan::is_digits_only;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// 1957-12-31 23:59:25 expressed as seconds since the Unix epoch.
pub const REFERENCE_EPOCH_UNIX_SECONDS: i64 = -378_691_235;

/// Longest fractional-second part the generic grammar accepts.
const MAX_FRACTION_DIGITS: usize = 7;

/// A calendar date and wall-clock time as written in the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub micros: u32,
    /// Zone offset in minutes, if the token carried one.
    pub offset_min: Option<i16>,
}

impl CalendarDateTime {
    /// Seconds since the Unix epoch. A zone offset moves the instant to UTC;
    /// without one the wall-clock value is taken as-is.
    pub fn unix_seconds(&self) -> i64 {
        let days = date_to_days(self.year, self.month, self.day);
        let local = days * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64;
        local - self.offset_min.unwrap_or(0) as i64 * SECONDS_PER_MINUTE
    }

    /// Whole seconds since the reference epoch (1957-12-31 23:59:25).
    /// Fractional seconds are dropped.
    pub fn reference_epoch_seconds(&self) -> i64 {
        self.unix_seconds() - REFERENCE_EPOCH_UNIX_SECONDS
    }
}

fn invalid(what: &str, input: &str) -> DateTimeParseError {
    DateTimeParseError::new(format!("Invalid {} in date-time: {}", what, input))
}

/// Parses a timezone offset string (Z, +HH:MM, -HH:MM) and returns offset in minutes.
fn parse_timezone_offset(offset: &str) -> Result<i16, DateTimeParseError> {
    if offset == "Z" || offset == "z" {
        return Ok(0);
    }

    let bytes = offset.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(invalid("timezone offset", offset));
    }

    let sign = match bytes[0] {
        b'+' => 1i16,
        b'-' => -1i16,
        _ => return Err(invalid("timezone offset", offset)),
    };

    let hours = parse_field(&offset[1..3], 2, 2, "timezone offset", offset)? as i16;
    let minutes = parse_field(&offset[4..6], 2, 2, "timezone offset", offset)? as i16;

    // Allow 24:00 as the outermost offset
    if hours > 24 || (hours == 24 && minutes != 0) || minutes > 59 {
        return Err(invalid("timezone offset", offset));
    }

    Ok(sign * (hours * 60 + minutes))
}

/// Parses fractional seconds string and returns microseconds.
fn parse_fractional_seconds(frac: &str) -> u32 {
    // Pad or truncate to 6 digits (microseconds)
    let mut padded = frac.to_string();
    while padded.len() < 6 {
        padded.push('0');
    }
    padded.truncate(6);
    padded.parse().unwrap_or(0)
}

/// Returns true if the given year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calculates days since Unix epoch for a given date.
fn date_to_days(year: i32, month: u32, day: u32) -> i64 {
    // Howard Hinnant's days_from_civil
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let m = if month <= 2 {
        month as i64 + 9
    } else {
        month as i64 - 3
    };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // year of era
    let doy = (153 * m + 2) / 5 + day as i64 - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146097 + doe - 719468
}

/// Converts days since Unix epoch to (year, month, day).
fn days_to_date(days: i64) -> (i64, u32, u32) {
    // Howard Hinnant's algorithm in reverse
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097; // day of era
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // year of era
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32; // day
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32; // month

    let year = if m <= 2 { y + 1 } else { y };
    (year, m, d)
}

/// Parses a run of `min_len..=max_len` ASCII digits.
fn parse_field(
    field: &str,
    min_len: usize,
    max_len: usize,
    what: &str,
    input: &str,
) -> Result<u32, DateTimeParseError> {
    if field.len() < min_len || field.len() > max_len || !is_digits_only(field) {
        return Err(invalid(what, input));
    }
    field.parse().map_err(|_| invalid(what, input))
}

/// Parses the date half of a generic token into (year, month, day).
fn parse_date(date: &str, input: &str) -> Result<(i32, u32, u32), DateTimeParseError> {
    let sep = if date.contains('-') { '-' } else { '/' };
    let parts: Vec<&str> = date.split(sep).collect();
    if parts.len() != 3 {
        return Err(invalid("date", input));
    }

    let (year, month, day) = if sep == '-' || parts[0].len() == 4 {
        (
            parse_field(parts[0], 4, 4, "year", input)?,
            parse_field(parts[1], 1, 2, "month", input)?,
            parse_field(parts[2], 1, 2, "day", input)?,
        )
    } else {
        // US order: M/D/YYYY
        (
            parse_field(parts[2], 4, 4, "year", input)?,
            parse_field(parts[0], 1, 2, "month", input)?,
            parse_field(parts[1], 1, 2, "day", input)?,
        )
    };

    let year = year as i32;
    if year < 1 {
        return Err(invalid("year", input));
    }
    if !(1..=12).contains(&month) {
        return Err(invalid("month", input));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(invalid("day", input));
    }

    Ok((year, month, day))
}

/// Parses `h:mm[:ss[.fraction]][zone]` into its fields.
fn parse_time(
    time: &str,
    input: &str,
) -> Result<(u32, u32, u32, u32, Option<i16>), DateTimeParseError> {
    let (clock, zone) = match time.find(['Z', 'z', '+', '-']) {
        Some(i) => (&time[..i], Some(&time[i..])),
        None => (time, None),
    };

    let (hms, fraction) = match clock.split_once('.') {
        Some((hms, frac)) => (hms, Some(frac)),
        None => (clock, None),
    };

    let fields: Vec<&str> = hms.split(':').collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(invalid("time", input));
    }
    // Fractional seconds need explicit seconds
    if fraction.is_some() && fields.len() != 3 {
        return Err(invalid("time", input));
    }

    let hour = parse_field(fields[0], 1, 2, "hours", input)?;
    let minute = parse_field(fields[1], 2, 2, "minutes", input)?;
    let second = match fields.get(2) {
        Some(s) => parse_field(s, 2, 2, "seconds", input)?,
        None => 0,
    };

    if hour > 23 {
        return Err(invalid("hours", input));
    }
    if minute > 59 {
        return Err(invalid("minutes", input));
    }
    if second > 59 {
        return Err(invalid("seconds", input));
    }

    let micros = match fraction {
        Some(frac) => {
            if frac.len() > MAX_FRACTION_DIGITS || !is_digits_only(frac) {
                return Err(invalid("fractional seconds", input));
            }
            parse_fractional_seconds(frac)
        }
        None => 0,
    };

    let offset_min = zone.map(parse_timezone_offset).transpose()?;

    Ok((hour, minute, second, micros, offset_min))
}

/// Parses a token with the generic grammar (see the module docs).
///
/// Surrounding whitespace is ignored. A date without a time is midnight.
pub fn parse_generic_datetime(input: &str) -> Result<CalendarDateTime, DateTimeParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DateTimeParseError::new("Empty date-time"));
    }

    let (date, time) = match text.find(['T', 't', ' ']) {
        Some(i) => {
            let rest = &text[i..];
            let time = if rest.starts_with(' ') {
                rest.trim_start_matches(' ')
            } else {
                &rest[1..]
            };
            if time.is_empty() {
                return Err(invalid("time", input));
            }
            (&text[..i], Some(time))
        }
        None => (text, None),
    };

    let (year, month, day) = parse_date(date, input)?;
    let (hour, minute, second, micros, offset_min) = match time {
        Some(t) => parse_time(t, input)?,
        None => (0, 0, 0, 0, None),
    };

    Ok(CalendarDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        micros,
        offset_min,
    })
}

/// Parses an exact `YYYY-MM-DD/hh:mm:ss` token.
///
/// The layout is checked first; the calendar fields are then validated by
/// the generic grammar with `/` read as a space.
pub fn parse_java_datetime(input: &str) -> Result<CalendarDateTime, DateTimeParseError> {
    let bytes = input.as_bytes();
    if bytes.len() != JAVA_DATETIME_LEN {
        return Err(DateTimeParseError::new(format!(
            "Java date-time must be {} characters: {}",
            JAVA_DATETIME_LEN, input
        )));
    }

    let delimiters = [(4, b'-'), (7, b'-'), (10, b'/'), (13, b':'), (16, b':')];
    if delimiters.iter().any(|&(i, d)| bytes[i] != d) {
        return Err(invalid("layout", input));
    }

    let groups: Vec<&str> = input.split(['-', '/', ':']).collect();
    if groups.len() != 6 {
        return Err(invalid("layout", input));
    }
    for (i, group) in groups.iter().enumerate() {
        let expected = if i == 0 { 4 } else { 2 };
        if group.len() != expected || !is_digits_only(group) {
            return Err(invalid("layout", input));
        }
    }

    parse_generic_datetime(&input.replace('/', " "))
}

/// Formats reference-epoch seconds as `YYYY-MM-DD/hh:mm:ss` (UTC).
///
/// Returns `None` when the instant falls outside years 1..=9999, which the
/// Java layout cannot express.
pub fn format_java_datetime(reference_seconds: i64) -> Option<String> {
    let unix = reference_seconds.checked_add(REFERENCE_EPOCH_UNIX_SECONDS)?;
    let days = unix.div_euclid(SECONDS_PER_DAY);
    let secs = unix.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = days_to_date(days);
    if !(1..=9999).contains(&year) {
        return None;
    }

    Some(format!(
        "{:04}-{:02}-{:02}/{:02}:{:02}:{:02}",
        year,
        month,
        day,
        secs / SECONDS_PER_HOUR,
        (secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        secs % SECONDS_PER_MINUTE
    ))
}
