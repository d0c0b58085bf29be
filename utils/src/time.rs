//! Time formatting helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a canonical timestamp string as a calendar date (`YYYY-MM-DD`).
///
/// Accepts RFC 3339 as well as the bare `YYYY-MM-DD[ HH:MM:SS]` forms some
/// backends emit. Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.date().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}
