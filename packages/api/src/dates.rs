//! Date parsing and display for timestamps returned by the API.
//!
//! The backend is not consistent about timestamp encoding: some fields are
//! RFC 3339 strings, some are plain `YYYY-MM-DD` dates, and some are epoch
//! milliseconds serialised as strings. [`parse_timestamp`] accepts all three.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}

/// `Mar 1, 2024`, or `Unknown date` when the value cannot be parsed.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// `March 1, 2024`, `N/A` when absent, `Invalid Date` when unparseable.
pub fn format_long_date(raw: Option<&str>) -> String {
    match raw {
        None => "N/A".to_string(),
        Some(raw) if raw.trim().is_empty() => "N/A".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "Invalid Date".to_string()),
    }
}

/// Turn an HTML date input value (`YYYY-MM-DD`) into an ISO-8601 instant at
/// midnight UTC. Empty or malformed input gives `None`.
pub fn date_input_to_iso(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| format!("{}T00:00:00.000Z", d.format("%Y-%m-%d")))
}

/// `1 record` / `3 records`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-03-01T10:00:00Z")), "Mar 1, 2024");
        assert_eq!(format_date(Some("2024-12-25")), "Dec 25, 2024");
        assert_eq!(format_date(Some("1709287200000")), "Mar 1, 2024");
        assert_eq!(format_date(Some("yesterday")), "Unknown date");
        assert_eq!(format_date(None), "Unknown date");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(Some("2023-07-04")), "July 4, 2023");
        assert_eq!(format_long_date(None), "N/A");
        assert_eq!(format_long_date(Some("nope")), "Invalid Date");
    }

    #[test]
    fn test_date_input_to_iso() {
        assert_eq!(
            date_input_to_iso("1990-04-02").as_deref(),
            Some("1990-04-02T00:00:00.000Z")
        );
        assert_eq!(date_input_to_iso(""), None);
        assert_eq!(date_input_to_iso("02/04/1990"), None);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "patient"), "1 patient");
        assert_eq!(pluralize(0, "patient"), "0 patients");
        assert_eq!(pluralize(4, "record"), "4 records");
    }
}
