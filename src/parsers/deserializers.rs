use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::TimestampError;

/// Naive layouts seen in exports, interpreted as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Custom deserializer for export string fields that may be `null`
pub fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an export `Date` value.
///
/// Accepts RFC3339, the export's `YYYY-MM-DD HH:MM:SS` layout (as UTC), a bare
/// `YYYY-MM-DD` (midnight UTC) and integer Unix milliseconds.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let s = raw.trim();
    let unparsable = || TimestampError::Unparsable(raw.to_string());

    if s.is_empty() {
        return Err(unparsable());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()).ok_or_else(unparsable);
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        // Assume it's a Unix timestamp in milliseconds
        let ms = s.parse::<i64>().map_err(|_| unparsable())?;
        return DateTime::from_timestamp_millis(ms).ok_or_else(unparsable);
    }

    Err(unparsable())
}
