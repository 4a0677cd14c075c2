//! Turning the command-line shift arguments into a time offset.

use chrono::{NaiveDate, TimeDelta};
use tracing::warn;

use crate::errors::PhotosortError;

/// Whole days, possibly negative (`-3`).
pub fn parse_shift_days(text: &str) -> Option<TimeDelta> {
    let days: i64 = text.trim().parse().ok()?;
    TimeDelta::try_days(days)
}

/// `YYYY-MM-DD`; components are plain integers so `2019-6-1` is accepted too.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Offset to apply to every capture timestamp.
///
/// `shift_days` wins when it parses; otherwise the offset is `to - from`.
pub fn resolve_delta(
    shift_days: Option<&str>,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<TimeDelta, PhotosortError> {
    if let Some(text) = shift_days {
        match parse_shift_days(text) {
            Some(delta) => return Ok(delta),
            None => warn!(value = %text, "ignoring unparseable --shift-days"),
        }
    }

    let (Some(from), Some(to)) = (from_date, to_date) else {
        return Err(PhotosortError::InvalidShiftArguments(
            "give --shift-days, or both --from-date and --to-date".to_string(),
        ));
    };
    let parse = |label: &str, text: &str| {
        parse_calendar_date(text).ok_or_else(|| {
            PhotosortError::InvalidShiftArguments(format!(
                "{label} '{text}' is not a YYYY-MM-DD date"
            ))
        })
    };
    let from = parse("from date", from)?;
    let to = parse("to date", to)?;
    Ok(to.signed_duration_since(from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_days_accepts_negative_numbers() {
        assert_eq!(parse_shift_days("-3"), Some(TimeDelta::days(-3)));
        assert_eq!(parse_shift_days(" 10 "), Some(TimeDelta::days(10)));
        assert_eq!(parse_shift_days("ten"), None);
    }

    #[test]
    fn shift_days_takes_precedence() {
        let d = resolve_delta(Some("2"), Some("2019-01-01"), Some("2019-01-31")).unwrap();
        assert_eq!(d, TimeDelta::days(2));
    }

    #[test]
    fn from_to_difference() {
        let d = resolve_delta(None, Some("2019-03-01"), Some("2019-02-27")).unwrap();
        assert_eq!(d, TimeDelta::days(-2));
    }

    #[test]
    fn bad_shift_days_falls_back_to_dates() {
        let d = resolve_delta(Some("x"), Some("2020-01-01"), Some("2021-01-01")).unwrap();
        assert_eq!(d, TimeDelta::days(366));
    }

    #[test]
    fn nothing_usable_is_an_error() {
        for (s, f, t) in [
            (None, None, None),
            (None, Some("2019-01-01"), None),
            (Some("abc"), None, None),
            (None, Some("2019-02-30"), Some("2019-03-01")),
            (None, Some("2019-01"), Some("2019-03-01")),
            (None, Some("2019-01-01-01"), Some("2019-03-01")),
        ] {
            let err = resolve_delta(s, f, t).unwrap_err();
            assert_eq!(err.kind(), "invalid_shift_arguments", "{s:?} {f:?} {t:?}");
        }
    }
}
