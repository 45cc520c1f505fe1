//! Date/time parsing for deadline and event arguments
//!
//! User input is matched against a fixed list of shapes. The first shape that
//! matches decides how the text is read; if that reading fails calendar
//! validation the whole parse fails instead of falling through to the next shape.

use crate::error::TaskError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern used whenever a timestamp is shown to the user, e.g. `Dec 25 2024 14:00`
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// Pattern used when a timestamp is written to the data file
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap());
static ISO_DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2})([0-9]{2})$").unwrap()
});
static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").unwrap());
static SLASH_DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}) ([0-9]{2})([0-9]{2})$").unwrap()
});
static CANONICAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]+)?)?$").unwrap()
});

/// The input shapes understood by [`parse_datetime`], in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGrammar {
    /// `2024-12-25`
    IsoDate,
    /// `2024-12-25 1400`
    IsoDateTime,
    /// `25/12/2024`
    SlashDate,
    /// `25/12/2024 1400`
    SlashDateTime,
    /// `2024-12-25T14:00:00`, the format this crate writes to disk
    Canonical,
}

impl DateGrammar {
    /// Pick the grammar for `text` by shape alone. Anything that matches none
    /// of the user-facing shapes is handed to the canonical reader.
    pub fn detect(text: &str) -> Self {
        if ISO_DATE.is_match(text) {
            DateGrammar::IsoDate
        } else if ISO_DATE_TIME.is_match(text) {
            DateGrammar::IsoDateTime
        } else if SLASH_DATE.is_match(text) {
            DateGrammar::SlashDate
        } else if SLASH_DATE_TIME.is_match(text) {
            DateGrammar::SlashDateTime
        } else {
            DateGrammar::Canonical
        }
    }
}

/// Parse a date or date-time typed by the user into a timestamp.
///
/// # Arguments
///
/// * `text` - The raw date text, e.g. `"2024-12-25 1400"` or `"25/12/2024"`
///
/// # Returns
///
/// * `Result<NaiveDateTime, TaskError>` - The timestamp, midnight when no clock time is given,
///   or `TaskError::InvalidDateFormat` for blank, unrecognised or impossible dates
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, TaskError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::InvalidDateFormat(text.to_string()));
    }

    let grammar = DateGrammar::detect(trimmed);
    debug!("Parsing '{}' as {:?}", trimmed, grammar);

    let parsed = match grammar {
        DateGrammar::IsoDate => {
            let caps = ISO_DATE.captures(trimmed);
            caps.and_then(|c| build(&c[1], &c[2], &c[3], None))
        }
        DateGrammar::IsoDateTime => {
            let caps = ISO_DATE_TIME.captures(trimmed);
            caps.and_then(|c| build(&c[1], &c[2], &c[3], Some((&c[4], &c[5]))))
        }
        DateGrammar::SlashDate => {
            let caps = SLASH_DATE.captures(trimmed);
            caps.and_then(|c| build(&c[3], &c[2], &c[1], None))
        }
        DateGrammar::SlashDateTime => {
            let caps = SLASH_DATE_TIME.captures(trimmed);
            caps.and_then(|c| build(&c[3], &c[2], &c[1], Some((&c[4], &c[5]))))
        }
        DateGrammar::Canonical => parse_canonical(trimmed),
    };

    parsed.ok_or_else(|| TaskError::InvalidDateFormat(text.to_string()))
}

/// Read the machine format written by storage. Seconds and fractions are optional.
pub fn parse_canonical(text: &str) -> Option<NaiveDateTime> {
    if !CANONICAL.is_match(text) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .ok()
}

fn build(year: &str, month: &str, day: &str, clock: Option<(&str, &str)>) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?;
    let time = match clock {
        Some((hour, minute)) => NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };
    Some(date.and_time(time))
}

/// Human-readable form, e.g. `Dec 25 2024 14:00`
pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Storage form, e.g. `2024-12-25T14:00:00`
pub fn format_storage(dt: &NaiveDateTime) -> String {
    dt.format(STORAGE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use test_case::test_case;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test_case("2024-12-25", at(2024, 12, 25, 0, 0) ; "iso date")]
    #[test_case("2024-12-25 1400", at(2024, 12, 25, 14, 0) ; "iso date with clock")]
    #[test_case("25/12/2024", at(2024, 12, 25, 0, 0) ; "slash date")]
    #[test_case("5/1/2025", at(2025, 1, 5, 0, 0) ; "slash date single digits")]
    #[test_case("05/01/2025 0930", at(2025, 1, 5, 9, 30) ; "slash date with clock")]
    #[test_case("2024-12-25T14:00", at(2024, 12, 25, 14, 0) ; "canonical without seconds")]
    #[test_case("2024-12-25T14:00:00", at(2024, 12, 25, 14, 0) ; "canonical with seconds")]
    #[test_case("  2024-12-25  ", at(2024, 12, 25, 0, 0) ; "surrounding whitespace")]
    fn test_parse_datetime_accepts(input: &str, expected: NaiveDateTime) {
        assert_eq!(parse_datetime(input).unwrap(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("not-a-date" ; "garbage")]
    #[test_case("tomorrow" ; "relative word")]
    #[test_case("2024-13-01" ; "month out of range")]
    #[test_case("2024-02-30" ; "day out of range")]
    #[test_case("31/4/2024" ; "slash day out of range")]
    #[test_case("2024-12-25 2460" ; "clock out of range")]
    #[test_case("2024-12-25 14:00" ; "colon clock is not a supported shape")]
    fn test_parse_datetime_rejects(input: &str) {
        assert!(matches!(parse_datetime(input), Err(TaskError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_iso_and_slash_agree() {
        let iso = parse_datetime("2024-12-25").unwrap();
        let slash = parse_datetime("25/12/2024").unwrap();
        assert_eq!(iso, slash);
        assert_eq!(iso.hour(), 0);
        assert_eq!(iso.minute(), 0);
    }

    #[test]
    fn test_clock_is_read_as_24_hour() {
        let dt = parse_datetime("2024-12-25 1400").unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.day(), 25);
    }

    #[test]
    fn test_shape_match_does_not_cascade() {
        // Looks like an ISO date, so the canonical reader is never consulted.
        assert_eq!(DateGrammar::detect("2024-02-30"), DateGrammar::IsoDate);
        assert!(parse_datetime("2024-02-30").is_err());
    }

    #[test]
    fn test_formats() {
        let dt = at(2024, 12, 5, 9, 5);
        assert_eq!(format_display(&dt), "Dec 05 2024 09:05");
        assert_eq!(format_storage(&dt), "2024-12-05T09:05:00");
        assert_eq!(parse_canonical(&format_storage(&dt)), Some(dt));
    }

    #[test_case("2024-1-5T14:00" ; "single digit month and day")]
    #[test_case("+2024-12-25T14:00" ; "signed year")]
    #[test_case("2024-12-25T14:00:00Z" ; "zone suffix")]
    #[test_case("2024-12-25T4:00" ; "single digit hour")]
    fn test_canonical_rejects_loose_forms(input: &str) {
        assert_eq!(parse_canonical(input), None);
        assert!(matches!(parse_datetime(input), Err(TaskError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_canonical_accepts_fractional_seconds() {
        assert_eq!(parse_canonical("2024-12-25T14:00:00.250").map(|dt| dt.hour()), Some(14));
    }
}
