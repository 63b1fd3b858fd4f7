// src/util/time.rs
use chrono::{DateTime, Utc};

use crate::domain::DomainError;

/// Parse an ISO 8601 / RFC 3339 timestamp into UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidTimestamp(value.to_string()))
}

/// "April 12, 2023 at 2:45 PM"
pub fn format_long(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// "Apr 12, 2023"
pub fn format_short(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Coarse relative age, e.g. "3 days ago" or "1 minute ago".
///
/// Only the largest non-zero unit is reported; timestamps in the future read
/// as "0 seconds ago".
pub fn time_passed(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *timestamp).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let (value, unit) = if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if minutes > 0 {
        (minutes, "minute")
    } else {
        (seconds, "second")
    };

    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[test]
    fn given_rfc3339_string_when_parsing_then_returns_utc_timestamp() {
        let ts = parse_timestamp("2023-04-12T14:45:00Z").unwrap();

        assert_eq!(ts.to_rfc3339(), "2023-04-12T14:45:00+00:00");
    }

    #[test]
    fn given_garbage_when_parsing_then_returns_invalid_timestamp() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(DomainError::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn given_timestamp_when_formatting_then_uses_us_style() {
        let ts = parse_timestamp("2023-04-12T14:45:00Z").unwrap();

        assert_eq!(format_long(&ts), "April 12, 2023 at 2:45 PM");
        assert_eq!(format_short(&ts), "Apr 12, 2023");
    }

    #[rstest]
    #[case(Duration::seconds(1), "1 second ago")]
    #[case(Duration::seconds(42), "42 seconds ago")]
    #[case(Duration::minutes(1), "1 minute ago")]
    #[case(Duration::minutes(59), "59 minutes ago")]
    #[case(Duration::hours(1), "1 hour ago")]
    #[case(Duration::hours(23), "23 hours ago")]
    #[case(Duration::days(1), "1 day ago")]
    #[case(Duration::days(12), "12 days ago")]
    fn given_elapsed_duration_when_describing_then_uses_largest_unit(
        #[case] elapsed: Duration,
        #[case] expected: &str,
    ) {
        let now = parse_timestamp("2023-05-01T12:00:00Z").unwrap();

        assert_eq!(time_passed(&(now - elapsed), &now), expected);
    }

    #[test]
    fn given_future_timestamp_when_describing_then_reports_zero_seconds() {
        let now = parse_timestamp("2023-05-01T12:00:00Z").unwrap();

        assert_eq!(time_passed(&(now + Duration::hours(2)), &now), "0 seconds ago");
    }
}
