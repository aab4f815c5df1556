use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Reads the timestamp shapes the backend is known to emit: RFC 3339 (with or
/// without fractional seconds), a bare `YYYY-MM-DDTHH:MM:SS`, or a plain date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Long Indian-English form, e.g. `1 March 2024`. Unparseable input is shown as-is.
pub fn format_long(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn format_long_opt(raw: Option<&str>) -> String {
    raw.map(format_long).unwrap_or_default()
}
