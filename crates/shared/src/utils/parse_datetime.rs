use chrono::{DateTime, NaiveDateTime, Utc};

/// Lenient timestamp parsing for upstream `created_at` fields.
///
/// Nearpay and the profile store are not consistent about offsets, so this
/// accepts RFC 3339 first and falls back to a bare datetime read as UTC.
/// Anything else yields `None`; callers treat such records as matching no
/// month window.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
