//! Human-oriented time formatting
//!
//! Approximate calendar arithmetic on purpose: a month is 30 days, a year
//! is 365, matching what listing views expect from a "3 weeks ago" label.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Descending unit table, coarsest first
const UNITS: [(&str, i64); 6] = [
    ("year", 365 * DAY),
    ("month", 30 * DAY),
    ("week", 7 * DAY),
    ("day", DAY),
    ("hour", HOUR),
    ("minute", MINUTE),
];

/// Render how long ago a timestamp was, relative to now
///
/// Anything under a minute (including future timestamps) is "just now".
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    relative_to(timestamp, Utc::now())
}

fn relative_to(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp).num_seconds();
    if elapsed < MINUTE {
        return "just now".to_string();
    }
    for (label, seconds) in UNITS {
        if elapsed >= seconds {
            let count = elapsed / seconds;
            let plural = if count == 1 { "" } else { "s" };
            return format!("{} {}{} ago", count, label, plural);
        }
    }
    // Unreachable: the minute floor above always matches
    "just now".to_string()
}

/// Fixed month-day hour-minute label, 24-hour clock
pub fn format_date_label(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_under_a_minute_is_just_now() {
        let now = base();
        assert_eq!(relative_to(now, now), "just now");
        assert_eq!(relative_to(now - Duration::seconds(59), now), "just now");
    }

    #[test]
    fn test_future_timestamps_are_just_now() {
        let now = base();
        assert_eq!(relative_to(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn test_unit_boundaries() {
        let now = base();
        assert_eq!(relative_to(now - Duration::seconds(60), now), "1 minute ago");
        assert_eq!(relative_to(now - Duration::minutes(59), now), "59 minutes ago");
        assert_eq!(relative_to(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(relative_to(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(relative_to(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_to(now - Duration::days(6), now), "6 days ago");
        assert_eq!(relative_to(now - Duration::days(7), now), "1 week ago");
        assert_eq!(relative_to(now - Duration::days(29), now), "4 weeks ago");
        assert_eq!(relative_to(now - Duration::days(30), now), "1 month ago");
        assert_eq!(relative_to(now - Duration::days(364), now), "12 months ago");
        assert_eq!(relative_to(now - Duration::days(365), now), "1 year ago");
        assert_eq!(relative_to(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_floor_division() {
        let now = base();
        // 2 days and 23 hours still reads as 2 days
        let ts = now - Duration::days(2) - Duration::hours(23);
        assert_eq!(relative_to(ts, now), "2 days ago");
    }

    #[test]
    fn test_date_label() {
        let ts = Utc.with_ymd_and_hms(2025, 9, 15, 15, 45, 0).unwrap();
        assert_eq!(format_date_label(ts), "09-15 15:45");
    }
}
