use chrono::{DateTime, Datelike, Utc};

use crate::models::Timestamp;

/// Placeholder shown for dates that could not be parsed
pub const UNKNOWN_DATE: &str = "Unknown";

/// Medium date with short time, e.g. "Jan 5, 2023, 9:00 AM"
pub fn format_date(timestamp: &Timestamp) -> String {
    match timestamp.as_datetime() {
        Some(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Format an inbox timestamp with tiered display:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
pub fn format_inbox_time(timestamp: &Timestamp) -> String {
    format_inbox_time_at(timestamp, &Utc::now())
}

pub(crate) fn format_inbox_time_at(timestamp: &Timestamp, now: &DateTime<Utc>) -> String {
    let Some(dt) = timestamp.as_datetime() else {
        return UNKNOWN_DATE.to_string();
    };

    let duration = now.signed_duration_since(*dt);
    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else {
        format_absolute(dt, now)
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        // Includes dates slightly in the future
        "just now".to_string()
    }
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
