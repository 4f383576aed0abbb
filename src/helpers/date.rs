//! Date helper functions

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

/// Text shown for a missing or unparseable timestamp
pub const INVALID_DATE: &str = "Invalid Date";

/// Format date in full format (like "January 1, 2024")
pub fn full_date<Z: TimeZone>(date: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format a CMS timestamp as a long en-US date in the given zone
///
/// # Examples
/// ```ignore
/// format_date(Some("2024-03-15T00:00:00Z"), Tz::UTC) // -> "March 15, 2024"
/// ```
pub fn format_date(timestamp: Option<&str>, tz: Tz) -> String {
    match timestamp.and_then(parse_timestamp) {
        Some(date) => full_date(&date.with_timezone(&tz)),
        None => INVALID_DATE.to_string(),
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as UTC)
fn parse_timestamp(s: &str) -> Option<DateTime<chrono::FixedOffset>> {
    let s = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date);
    }
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
