use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::{Result, WeatherError};

/// Number of leading characters of an ISO string that carry the date and the
/// time to the second. Anything after (fractions, offsets) is dropped.
const SIGNIFICANT_CHARS: usize = 19;

/// Calendar date layouts, extended then basic.
const DATE_FMTS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Time-of-day layouts, tried in order. Hour-only times are handled apart
/// because chrono needs a minute to build a time.
const TIME_FMTS: &[&str] = &["%H:%M:%S", "%H:%M", "%H%M%S", "%H%M"];

/// Display layout: `Tuesday 06 July 2021`.
const DISPLAY_FMT: &str = "%A %d %B %Y";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse the significant prefix of an ISO-8601 string into a naive date-time.
///
/// The string is truncated to its first 19 characters, so
/// `"2021-07-06T07:00:00+08:00"` and `"2021-07-06T07:00:00.250"` both read as
/// 07:00:00 on 6 July 2021. Any `Z` or `±HH[:MM]` designator still left after
/// truncation is dropped as well, so `"2021-07-06T07:00+08:00"` reads as
/// 07:00. No timezone conversion takes place. A bare date is read as
/// midnight.
pub fn parse_iso_datetime(iso_string: &str) -> Result<NaiveDateTime> {
    let significant = truncate_chars(iso_string, SIGNIFICANT_CHARS);

    let (date_part, time_part) = match significant.find(|c: char| c == 'T' || c == ' ') {
        Some(idx) => (&significant[..idx], Some(&significant[idx + 1..])),
        None => (significant, None),
    };

    let date = parse_date(date_part);
    let time = match time_part {
        Some(t) => parse_time(strip_fraction(strip_utc_offset(t))),
        None => Some(NaiveTime::MIN),
    };

    match (date, time) {
        (Some(date), Some(time)) => Ok(date.and_time(time)),
        _ => {
            debug!("could not parse date \"{}\"", iso_string);
            Err(WeatherError::DateParse(iso_string.to_string()))
        }
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Convert an ISO-8601 date string into `<Weekday> <DD> <Month> <YYYY>`.
///
/// # Examples
///
/// ```
/// use weather_core::time_utils::convert_date;
///
/// assert_eq!(convert_date("2021-07-06T12:00:00").unwrap(), "Tuesday 06 July 2021");
/// assert_eq!(convert_date("2021-07-02T07:00:00+08:00").unwrap(), "Friday 02 July 2021");
/// assert!(convert_date("yesterday").is_err());
/// ```
pub fn convert_date(iso_string: &str) -> Result<String> {
    let dt = parse_iso_datetime(iso_string)?;
    Ok(dt.format(DISPLAY_FMT).to_string())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Return at most the first `max` characters of `s`, respecting UTF-8
/// boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FMTS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0));
    }
    TIME_FMTS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// Drop a trailing `Z` or `±HH[:MM]` designator from a time-of-day.
fn strip_utc_offset(time: &str) -> &str {
    if let Some(stripped) = time.strip_suffix('Z') {
        return stripped;
    }
    match time.rfind(|c: char| c == '+' || c == '-') {
        Some(idx) => &time[..idx],
        None => time,
    }
}

/// Drop fractional seconds (`.250` or `,250`).
fn strip_fraction(time: &str) -> &str {
    match time.find(|c: char| c == '.' || c == ',') {
        Some(idx) => &time[..idx],
        None => time,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    // ── convert_date ─────────────────────────────────────────────────────────

    #[test]
    fn test_convert_date_basic() {
        assert_eq!(
            convert_date("2021-07-06T12:00:00").unwrap(),
            "Tuesday 06 July 2021"
        );
    }

    #[test]
    fn test_convert_date_ignores_offset_suffix() {
        assert_eq!(
            convert_date("2021-07-07T07:00:00+08:00").unwrap(),
            "Wednesday 07 July 2021"
        );
    }

    #[test]
    fn test_convert_date_ignores_fractional_seconds() {
        assert_eq!(
            convert_date("2020-06-19T23:59:59.999999").unwrap(),
            "Friday 19 June 2020"
        );
    }

    #[test]
    fn test_convert_date_no_timezone_shift() {
        // A late-evening timestamp with a negative offset stays on its own day.
        assert_eq!(
            convert_date("2021-12-31T23:00:00-10:00").unwrap(),
            "Friday 31 December 2021"
        );
    }

    #[test]
    fn test_convert_date_zero_pads_day() {
        assert_eq!(
            convert_date("2022-01-01T00:00:00").unwrap(),
            "Saturday 01 January 2022"
        );
    }

    #[test]
    fn test_convert_date_space_separator() {
        assert_eq!(
            convert_date("2021-07-06 08:30:00").unwrap(),
            "Tuesday 06 July 2021"
        );
    }

    #[test]
    fn test_convert_date_date_only() {
        assert_eq!(convert_date("2024-02-29").unwrap(), "Thursday 29 February 2024");
    }

    #[test]
    fn test_convert_date_minute_precision_with_zulu() {
        assert_eq!(convert_date("2021-07-06T07:00Z").unwrap(), "Tuesday 06 July 2021");
    }

    #[test]
    fn test_convert_date_minute_precision_with_offset() {
        assert_eq!(
            convert_date("2021-07-06T07:00+08:00").unwrap(),
            "Tuesday 06 July 2021"
        );
        assert_eq!(
            convert_date("2021-07-06T23:30-05:00").unwrap(),
            "Tuesday 06 July 2021"
        );
    }

    #[test]
    fn test_convert_date_hour_only() {
        assert_eq!(convert_date("2021-07-06T12").unwrap(), "Tuesday 06 July 2021");
    }

    #[test]
    fn test_convert_date_basic_format() {
        assert_eq!(convert_date("20210706").unwrap(), "Tuesday 06 July 2021");
        assert_eq!(
            convert_date("20210706T070000+0800").unwrap(),
            "Tuesday 06 July 2021"
        );
    }

    #[test]
    fn test_convert_date_out_of_range_hour_is_error() {
        assert!(convert_date("2021-07-06T25").is_err());
    }

    #[test]
    fn test_convert_date_garbage_is_error() {
        let err = convert_date("not-a-date").unwrap_err();
        assert!(matches!(err, WeatherError::DateParse(ref s) if s == "not-a-date"));
    }

    #[test]
    fn test_convert_date_invalid_calendar_day_is_error() {
        assert!(convert_date("2021-02-30T00:00:00").is_err());
    }

    #[test]
    fn test_convert_date_empty_is_error() {
        assert!(convert_date("").is_err());
    }

    #[test]
    fn test_convert_date_is_idempotent() {
        let a = convert_date("2021-07-06T12:00:00").unwrap();
        let b = convert_date("2021-07-06T12:00:00").unwrap();
        assert_eq!(a, b);
    }

    // ── parse_iso_datetime ───────────────────────────────────────────────────

    #[test]
    fn test_parse_iso_datetime_fields() {
        let dt = parse_iso_datetime("2021-07-06T14:05:09Z").unwrap();
        assert_eq!(dt.year(), 2021);
        assert_eq!(dt.month(), 7);
        assert_eq!(dt.day(), 6);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 5);
        assert_eq!(dt.second(), 9);
    }

    #[test]
    fn test_parse_iso_datetime_minutes_only() {
        let dt = parse_iso_datetime("2021-07-06T14:05").unwrap();
        assert_eq!(dt.minute(), 5);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_parse_iso_datetime_hour_only() {
        let dt = parse_iso_datetime("2021-07-06T12").unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_iso_datetime_drops_offset_after_minutes() {
        let dt = parse_iso_datetime("2021-07-06T07:45+08:00").unwrap();
        assert_eq!(dt.hour(), 7);
        assert_eq!(dt.minute(), 45);
    }

    #[test]
    fn test_parse_iso_datetime_date_only_is_midnight() {
        let dt = parse_iso_datetime("2021-07-06").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    // ── truncate_chars ───────────────────────────────────────────────────────

    #[test]
    fn test_truncate_chars_shorter_than_limit() {
        assert_eq!(truncate_chars("2021", 19), "2021");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("°°°°", 2), "°°");
    }

    // ── strip_utc_offset / strip_fraction ────────────────────────────────────

    #[test]
    fn test_strip_utc_offset() {
        assert_eq!(strip_utc_offset("07:00Z"), "07:00");
        assert_eq!(strip_utc_offset("07:00+08"), "07:00");
        assert_eq!(strip_utc_offset("07:00-05:00"), "07:00");
        assert_eq!(strip_utc_offset("07:00:00"), "07:00:00");
    }

    #[test]
    fn test_strip_fraction() {
        assert_eq!(strip_fraction("070000.250"), "070000");
        assert_eq!(strip_fraction("07:00:00,5"), "07:00:00");
        assert_eq!(strip_fraction("07:00"), "07:00");
    }
}
