//! Time utilities: parsing timestamps, minute arithmetic, formatting.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Naive layouts accepted besides RFC 3339; read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .map(|naive| naive.and_utc())
}

/// Whole minutes from `start` to `end`, floored (negative if `end < start`).
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(60_000)
}

pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-01-01T10:00:00+01:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-01T09:00:00+00:00");
    }

    #[test]
    fn parses_datetime_local_layout() {
        let ts = parse_timestamp("2024-01-01T09:30").unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-01 09:30:00 UTC");
        assert!(parse_timestamp("2024-01-01 09:30:15").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("09:30").is_none());
        assert!(parse_timestamp("2024-13-01T09:00").is_none());
    }

    #[test]
    fn minutes_are_floored() {
        let a = parse_timestamp("2024-01-01T09:00:00Z").unwrap();
        let b = parse_timestamp("2024-01-01T09:01:59Z").unwrap();
        assert_eq!(minutes_between(a, b), 1);
        assert_eq!(minutes_between(b, a), -2);
    }
}
