//! Display formatting for prices, percentages and timestamps
//!
//! Pure functions only. `now` is passed in so relative times are testable.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Magnitude suffixes, largest first
const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Naive layouts the backend emits (`datetime.now()` / `isoformat()`, local time)
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format a dollar amount with a T/B/M/K suffix and two decimals
///
/// Zero and NaN render as `$0.00`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() || value == 0.0 {
        return "$0.00".to_string();
    }

    for (threshold, suffix) in SUFFIXES {
        if value >= threshold {
            return format!("${:.2}{suffix}", value / threshold);
        }
    }

    format!("${value:.2}")
}

/// Direction of a 24h change, used for the badge glyph and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Direction::Up => "badge badge-positive",
            Direction::Down => "badge badge-negative",
        }
    }
}

/// Rendered 24h change, e.g. `▲ 2.50%`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBadge {
    pub text: String,
    pub direction: Direction,
}

/// Format a percent change; zero counts as up
pub fn format_change(change_24h: f64) -> ChangeBadge {
    let change = if change_24h.is_nan() { 0.0 } else { change_24h };
    let direction = if change >= 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };

    ChangeBadge {
        text: format!("{} {:.2}%", direction.glyph(), change.abs()),
        direction,
    }
}

/// Parse an RFC 3339 or naive timestamp
///
/// Naive timestamps are wall-clock times in the local zone; a time that
/// falls in a DST fold resolves to the earlier instant.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Format how long ago `timestamp` was, relative to `now`
///
/// Missing or unparseable timestamps render as `Unknown`. Timestamps in the
/// future count as `Just now`.
pub fn format_time_ago(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(at) = timestamp
        .filter(|raw| !raw.trim().is_empty())
        .and_then(parse_timestamp)
    else {
        return "Unknown".to_string();
    };

    let seconds = (now - at).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{} min ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3_600)
    } else {
        format!("{} days ago", seconds / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 17, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        (now() - delta).to_rfc3339()
    }

    #[test]
    fn test_currency_suffixes() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1500.0), "$1.50K");
        assert_eq!(format_currency(2_500_000.0), "$2.50M");
        assert_eq!(format_currency(2_500_000_000.0), "$2.50B");
        assert_eq!(format_currency(1.2e12), "$1.20T");
    }

    #[test]
    fn test_currency_edge_values() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(0.05), "$0.05");
        assert_eq!(format_currency(-5.0), "$-5.00");
        // Rounds up within the K band instead of promoting to M
        assert_eq!(format_currency(999_999.0), "$1000.00K");
    }

    #[test]
    fn test_change_badge() {
        let up = format_change(2.5);
        assert_eq!(up.text, "▲ 2.50%");
        assert_eq!(up.direction, Direction::Up);

        let down = format_change(-3.456);
        assert_eq!(down.text, "▼ 3.46%");
        assert_eq!(down.direction.badge_class(), "badge badge-negative");

        assert_eq!(format_change(0.0).text, "▲ 0.00%");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(format_time_ago(Some(&ago(Duration::seconds(30))), now), "Just now");
        assert_eq!(format_time_ago(Some(&ago(Duration::minutes(5))), now), "5 min ago");
        assert_eq!(format_time_ago(Some(&ago(Duration::hours(3))), now), "3 hours ago");
        assert_eq!(format_time_ago(Some(&ago(Duration::days(2))), now), "2 days ago");
    }

    #[test]
    fn test_time_ago_floors() {
        let now = now();
        let almost_hour = Duration::minutes(59) + Duration::seconds(59);
        assert_eq!(format_time_ago(Some(&ago(almost_hour)), now), "59 min ago");
        assert_eq!(format_time_ago(Some(&ago(Duration::hours(1))), now), "1 hours ago");
    }

    #[test]
    fn test_time_ago_missing_or_invalid() {
        let now = now();
        assert_eq!(format_time_ago(None, now), "Unknown");
        assert_eq!(format_time_ago(Some(""), now), "Unknown");
        assert_eq!(format_time_ago(Some("yesterday"), now), "Unknown");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let future = (now() + Duration::minutes(10)).to_rfc3339();
        assert_eq!(format_time_ago(Some(&future), now()), "Just now");
    }

    #[test]
    fn test_parse_naive_backend_timestamps() {
        let expected = Local
            .with_ymd_and_hms(2025, 10, 17, 11, 55, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_timestamp("2025-10-17 11:55:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-10-17T11:55:00"), Some(expected));

        let with_micros = parse_timestamp("2025-10-17 11:55:00.123456").unwrap();
        assert!(with_micros > expected);
        let later = expected + Duration::minutes(4) + Duration::seconds(30);
        assert_eq!(format_time_ago(Some("2025-10-17 11:55:00.123456"), later), "4 min ago");
    }

    #[test]
    fn test_naive_timestamp_is_local_wall_clock() {
        let stamp = Local::now()
            .naive_local()
            .format("%Y-%m-%d %H:%M:%S%.6f")
            .to_string();

        let parsed = parse_timestamp(&stamp).unwrap();
        assert!((Utc::now() - parsed).num_seconds().abs() < 5);
        assert_eq!(format_time_ago(Some(&stamp), Utc::now()), "Just now");
    }
}
