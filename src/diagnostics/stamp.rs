//! Timestamp formatting
//!
//! Zero-padded `YYYY/MM/DD HH:MM:SS.mmm` stamps used as the prefix of every
//! diagnostic line.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt::Display;

/// Separator between the timestamp and the message
pub const STAMP_SEPARATOR: &str = "> ";

/// Left-pad the decimal form of `num` with zeros up to `width` digits.
///
/// A width at or below the natural length leaves the number untouched.
pub fn zero_pad(num: u64, width: usize) -> String {
    format!("{:0>width$}", num, width = width)
}

/// Format a point in time as `YYYY/MM/DD HH:MM:SS.mmm`
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    // Leap seconds report 1000+ ms; keep the field three digits wide.
    let millis = dt.timestamp_subsec_millis().min(999);
    // Years before the common era keep their sign unpadded.
    let year = match u64::try_from(dt.year()) {
        Ok(year) => zero_pad(year, 4),
        Err(_) => dt.year().to_string(),
    };

    format!(
        "{}/{}/{} {}:{}:{}.{}",
        year,
        zero_pad(u64::from(dt.month()), 2),
        zero_pad(u64::from(dt.day()), 2),
        zero_pad(u64::from(dt.hour()), 2),
        zero_pad(u64::from(dt.minute()), 2),
        zero_pad(u64::from(dt.second()), 2),
        zero_pad(u64::from(millis), 3),
    )
}

/// Build a complete diagnostic line: stamp, separator, message
pub fn stamp_line<Tz: TimeZone>(dt: &DateTime<Tz>, message: impl Display) -> String {
    format!("{}{}{}", format_timestamp(dt), STAMP_SEPARATOR, message)
}
