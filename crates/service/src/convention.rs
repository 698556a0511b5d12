//! Fixed-width date/time text conventions.
//!
//! Delimited-text writers put a space between the date and the time of day,
//! markup formats put a `T`. Both use the same three widths: 10 characters
//! for a bare date, 19 for a datetime, and anything longer for a datetime
//! with up to six fractional digits (only the first 26 characters are read).

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use sheetio_types::TypedValue;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;
const DATETIME_LEN: usize = 19;
const FRACTIONAL_LEN: usize = 26;

/// Separator convention between the date and time parts of a datetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateConvention {
    /// `YYYY-MM-DD HH:MM:SS`, as written by delimited-text formats.
    Spaced,
    /// `YYYY-MM-DDTHH:MM:SS`, as declared by markup formats.
    Iso,
}

impl DateConvention {
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            DateConvention::Spaced => ' ',
            DateConvention::Iso => 'T',
        }
    }

    #[must_use]
    pub const fn datetime_format(self) -> &'static str {
        match self {
            DateConvention::Spaced => "%Y-%m-%d %H:%M:%S",
            DateConvention::Iso => "%Y-%m-%dT%H:%M:%S",
        }
    }

    const fn fractional_format(self) -> &'static str {
        match self {
            DateConvention::Spaced => "%Y-%m-%d %H:%M:%S%.f",
            DateConvention::Iso => "%Y-%m-%dT%H:%M:%S%.f",
        }
    }

    /// Parse `text` by its length. Returns a date for 10 characters and a
    /// datetime for 19 or more; every other length is `None`.
    #[must_use]
    pub fn parse(self, text: &str) -> Option<TypedValue> {
        if !has_year_prefix(text) {
            return None;
        }
        match text.chars().count() {
            DATE_LEN => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .map(TypedValue::Date),
            DATETIME_LEN => NaiveDateTime::parse_from_str(text, self.datetime_format())
                .ok()
                .filter(is_not_leap_second)
                .map(TypedValue::DateTime),
            n if n > DATETIME_LEN => {
                let head = char_prefix(text, FRACTIONAL_LEN);
                // %.f also accepts a missing fraction; a longer text must carry one
                if head.chars().nth(DATETIME_LEN) != Some('.') {
                    return None;
                }
                NaiveDateTime::parse_from_str(head, self.fractional_format())
                    .ok()
                    .filter(is_not_leap_second)
                    .map(TypedValue::DateTime)
            }
            _ => None,
        }
    }
}

/// chrono reads second 60 as a leap second; a cell second must be 0-59.
fn is_not_leap_second(dt: &NaiveDateTime) -> bool {
    dt.nanosecond() < 1_000_000_000
}

/// Four ASCII digits followed by `-`.
fn has_year_prefix(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

/// The first `n` characters of `text`, or all of it when shorter.
fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
