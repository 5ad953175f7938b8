//! Due-date and task ID checks.
//!
//! Everything here is pure except [`is_valid_due_date`], which reads the clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{TaskError, TaskResult};
use crate::models::TaskId;

/// Naive layouts accepted after RFC 3339, interpreted as UTC
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a due date.
///
/// Accepts RFC 3339 (`2026-10-19T10:00:00Z`, `2026-10-19T10:00:00+02:00`),
/// RFC 2822 / HTTP dates (`Mon, 19 Oct 2026 10:00:00 GMT`), a date-time
/// without offset (`2026-10-19T10:00:00`, read as UTC) and a bare date
/// (`2026-10-19`, midnight UTC).
pub fn parse_due_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// True when `value` parses and is strictly later than `now`.
pub fn is_valid_due_date_at(value: &str, now: DateTime<Utc>) -> bool {
    parse_due_date(value).is_some_and(|due| due > now)
}

/// True when `value` parses and is strictly later than the current time.
pub fn is_valid_due_date(value: &str) -> bool {
    is_valid_due_date_at(value, Utc::now())
}

/// Parse `value` and require it to lie after `now`.
pub fn future_due_date(value: &str, now: DateTime<Utc>) -> TaskResult<DateTime<Utc>> {
    parse_due_date(value)
        .filter(|due| *due > now)
        .ok_or(TaskError::InvalidDueDate)
}

/// Parse a raw path segment as a task id.
///
/// Leading whitespace is skipped, then an optional sign and the run of
/// decimal digits that follows are read; anything after the digits is
/// ignored, so `7abc` and `7.0` both name task 7. A segment without leading
/// digits, or one whose digits overflow an `i64`, is rejected. Whether the
/// task exists is up to the store.
pub fn validate_id(raw: &str) -> TaskResult<TaskId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return Err(TaskError::InvalidId);
    }

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return Err(TaskError::InvalidId);
    }

    trimmed[..sign_len + digits_len]
        .parse::<TaskId>()
        .map_err(|_| TaskError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_due_date("2026-10-19T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_date_time_as_utc() {
        let parsed = parse_due_date("2026-10-19T08:15:30.250").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap() + Duration::milliseconds(250)
        );
        assert!(parse_due_date("2026-10-19 08:15:30").is_some());
    }

    #[test]
    fn test_parse_rfc2822_http_date() {
        let parsed = parse_due_date("Thu, 01 Jan 2099 10:00:00 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2099, 1, 1, 10, 0, 0).unwrap());

        let parsed = parse_due_date("Mon, 19 Oct 2026 12:00:00 +0200").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_bare_date_is_midnight_utc() {
        let parsed = parse_due_date(" 2026-12-31 ").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_due_date("").is_none());
        assert!(parse_due_date("tomorrow").is_none());
        assert!(parse_due_date("2026-13-01").is_none());
        assert!(parse_due_date("2026-02-30T10:00:00Z").is_none());
    }

    #[test]
    fn test_due_date_must_be_strictly_in_the_future() {
        assert!(is_valid_due_date_at("2026-10-18T12:00:01Z", now()));
        assert!(!is_valid_due_date_at("2026-10-18T12:00:00Z", now()));
        assert!(!is_valid_due_date_at("2026-10-17", now()));
        assert!(!is_valid_due_date_at("not a date", now()));
    }

    #[test]
    fn test_is_valid_due_date_uses_system_clock() {
        let tomorrow = (Utc::now() + Duration::days(1)).to_rfc3339();
        let yesterday = (Utc::now() - Duration::days(1)).to_rfc3339();

        assert!(is_valid_due_date(&tomorrow));
        assert!(!is_valid_due_date(&yesterday));
    }

    #[test]
    fn test_future_due_date_errors() {
        assert_eq!(
            future_due_date("2020-01-01", now()),
            Err(TaskError::InvalidDueDate)
        );
        assert!(future_due_date("2030-01-01", now()).is_ok());
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id("42"), Ok(42));
        assert_eq!(validate_id("-3"), Ok(-3));
        assert_eq!(validate_id("+8"), Ok(8));
        assert_eq!(validate_id(" 5"), Ok(5));
    }

    #[test]
    fn test_validate_id_reads_leading_digits() {
        assert_eq!(validate_id("12abc"), Ok(12));
        assert_eq!(validate_id("1.0"), Ok(1));
        assert_eq!(validate_id("1.5"), Ok(1));
        assert_eq!(validate_id("007"), Ok(7));
        assert_eq!(validate_id("-2x"), Ok(-2));
    }

    #[test]
    fn test_validate_id_rejects_segments_without_leading_digits() {
        assert_eq!(validate_id("abc"), Err(TaskError::InvalidId));
        assert_eq!(validate_id("a12"), Err(TaskError::InvalidId));
        assert_eq!(validate_id(".5"), Err(TaskError::InvalidId));
        assert_eq!(validate_id("-"), Err(TaskError::InvalidId));
        assert_eq!(validate_id("--1"), Err(TaskError::InvalidId));
        assert_eq!(validate_id(""), Err(TaskError::InvalidId));
        assert_eq!(
            validate_id("99999999999999999999"),
            Err(TaskError::InvalidId)
        );
    }
}
