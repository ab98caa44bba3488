// Shared value helpers used across bounded contexts.
//
// Timestamps
// - All i64 instants are epoch milliseconds, interpreted in UTC.

use chrono::{DateTime, Duration, Utc};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Converts epoch milliseconds to a UTC instant. `None` when the value is
/// outside the representable range.
pub fn utc_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Instant `days` whole days before `now`.
pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Splits a comma-separated id list, dropping blank segments.
pub fn split_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims a free-text value, mapping blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
