//! Date-header grammar.
//!
//! Parses human-readable date headers of the fixed shape
//! `"Weekday, Month Day, Year"` (for example `"Saturday, February 15,
//! 2025"`) into a calendar date. A blank or whitespace-only header is a
//! valid input meaning "no associated date", not an error.

use std::fmt;

use chrono::NaiveDate;

/// The twelve English month names, in calendar order. Lookup is exact and
/// case sensitive.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors from parsing a date header.
///
/// `Malformed` covers everything wrong with the string itself (wrong part
/// count, unknown month name, non-numeric day or year); `Invalid` means
/// the string was well formed but names a date that does not exist on the
/// calendar. The two are kept distinct so callers can tighten handling of
/// calendar-invalid dates later without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Malformed(String),
    Invalid { year: i32, month: u32, day: u32 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Malformed(msg) => write!(f, "malformed date header: {}", msg),
            DateError::Invalid { year, month, day } => {
                write!(f, "no such calendar date: {:04}-{:02}-{:02}", year, month, day)
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Parse a date header into a calendar date.
///
/// Returns `Ok(None)` for a blank or whitespace-only header (including the
/// bare `"\n"` text node the markup layer hands over between sections).
/// Otherwise the header must split on `", "` into exactly weekday, `"Month
/// Day"`, and year; the weekday is discarded. Shape or lookup failures are
/// [`DateError::Malformed`]; a well-formed header naming a nonexistent
/// date (February 30th) is [`DateError::Invalid`].
pub fn parse_date(header: &str) -> Result<Option<NaiveDate>, DateError> {
    if header.trim().is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = header.trim().split(", ").collect();
    let [_weekday, month_day, year] = parts.as_slice() else {
        return Err(DateError::Malformed(format!(
            "expected 3 comma-separated parts, got {}: {:?}",
            parts.len(),
            header
        )));
    };

    let tokens: Vec<&str> = month_day.split_whitespace().collect();
    let [month_name, day] = tokens.as_slice() else {
        return Err(DateError::Malformed(format!(
            "expected \"Month Day\", got {:?}",
            month_day
        )));
    };

    let month = MONTHS
        .iter()
        .position(|name| name == month_name)
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| DateError::Malformed(format!("unknown month name {:?}", month_name)))?;

    let day: u32 = day
        .parse()
        .map_err(|_| DateError::Malformed(format!("day is not a number: {:?}", day)))?;
    let year: i32 = year
        .parse()
        .map_err(|_| DateError::Malformed(format!("year is not a number: {:?}", year)))?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Ok(Some(date)),
        None => Err(DateError::Invalid { year, month, day }),
    }
}
