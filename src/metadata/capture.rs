//! Parsing of EXIF date text into the values the two engines work with.

use chrono::NaiveDateTime;
use std::fmt;

/// Layout of EXIF date/time tags: `YYYY:MM:DD HH:MM:SS`.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Calendar day a file was captured on, as found in its metadata.
///
/// Components keep the text of the tag (`"06"` stays `"06"`) because they
/// become directory names verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl CaptureDate {
    /// Parse the date part of `YYYY:MM:DD HH:MM:SS`.
    ///
    /// Only the first whitespace-separated token is used; it must split on `:`
    /// into exactly three non-empty runs of ASCII digits.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let mut parts = first.split(':');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !(digits(year) && digits(month) && digits(day)) {
            return None;
        }
        Some(Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        })
    }
}

impl fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Full timestamp for the shift engine. Trailing NULs and spaces are ignored.
pub fn parse_capture_timestamp(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    NaiveDateTime::parse_from_str(trimmed, EXIF_DATETIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_standard_exif_text() {
        let d = CaptureDate::parse("2019:06:01 10:00:00").unwrap();
        assert_eq!(d.year, "2019");
        assert_eq!(d.month, "06");
        assert_eq!(d.day, "01");
        assert_eq!(d.to_string(), "2019-06-01");
    }

    #[test]
    fn date_only_is_enough() {
        assert!(CaptureDate::parse("2020:12:31").is_some());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in [
            "",
            "   ",
            "2019:06 10:00:00",
            "2019:06:01:02 10:00:00",
            "2019::01 10:00:00",
            "2019-06-01 10:00:00",
            "20l9:06:01 10:00:00",
            "    :  :     :  :  ",
        ] {
            assert_eq!(CaptureDate::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn timestamp_parses_and_tolerates_nul_padding() {
        let expected = NaiveDate::from_ymd_opt(2019, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parse_capture_timestamp("2019:06:01 10:00:00"), Some(expected));
        assert_eq!(parse_capture_timestamp("2019:06:01 10:00:00\0"), Some(expected));
        assert_eq!(parse_capture_timestamp("2019:02:30 10:00:00"), None);
    }
}
