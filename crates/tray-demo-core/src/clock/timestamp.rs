use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// RFC 1123 layout with a numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 +0000`.
const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Format a wall-clock time for display.
///
/// The output parses back with [`DateTime::parse_from_rfc2822`].
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}
