//! Timestamp handling for scanner output.
//!
//! Scanners write either RFC 3339 values with an offset or naive ISO values
//! such as `2026-01-01T10:00:00.123456` (Python `datetime.isoformat()`).
//! Naive values are read as UTC. None of these helpers fail: an unparseable
//! timestamp simply yields `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a timestamp into an instant
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive(raw).map(|naive| naive.and_utc())
}

/// Parses a timestamp into the wall-clock time it was written in
///
/// Offsets are kept as-is rather than converted, so a report shows the same
/// clock time the scanner recorded.
pub fn parse_wall_clock(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    parse_naive(raw)
}

/// Calendar date portion of a timestamp (text before `T`)
pub fn date_portion(raw: &str) -> Option<NaiveDate> {
    let date = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Parses a date-only or full timestamp filter bound
pub fn parse_bound(raw: &str) -> Option<DateTime<Utc>> {
    parse_instant(raw).or_else(|| {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    })
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_instant_rfc3339_utc() {
        let dt = parse_instant("2026-03-01T10:15:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_with_offset_converts_to_utc() {
        let dt = parse_instant("2026-03-01T17:15:00+07:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_naive_python_isoformat() {
        let dt = parse_instant("2026-03-01T10:15:00.123456").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_instant_invalid() {
        assert!(parse_instant("yesterday").is_none());
        assert!(parse_instant("").is_none());
    }

    #[test]
    fn test_parse_wall_clock_keeps_offset_time() {
        let naive = parse_wall_clock("2026-03-01T17:15:00+07:00").unwrap();
        assert_eq!(naive.hour(), 17);
    }

    #[test]
    fn test_date_portion() {
        let date = date_portion("2026-03-01T23:59:59.999").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 3, 1));
        assert!(date_portion("not-a-date").is_none());
    }

    #[test]
    fn test_parse_bound_date_only() {
        let dt = parse_bound("2026-03-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    }
}
