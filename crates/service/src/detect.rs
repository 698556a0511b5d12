//! Heuristic detection for cells that carry no declared type.
//!
//! Every detector is total: malformed text is `None`, never an error, so a
//! caller can try the next candidate type and finally keep the text as a
//! string.

use crate::convention::DateConvention;
use regex::Regex;
use sheetio_types::TypedValue;
use std::sync::OnceLock;

/// Detect a date or datetime written by a delimited-text writer.
///
/// The width decides the pattern: 10 characters is `YYYY-MM-DD`,
/// 19 is `YYYY-MM-DD HH:MM:SS`, longer text is read up to microseconds
/// from its first 26 characters.
#[must_use]
pub fn detect_date(text: &str) -> Option<TypedValue> {
    DateConvention::Spaced.parse(text)
}

/// Detect a float.
///
/// Text starting with `0` is skipped unless it starts with `0.`, so
/// zero-padded codes such as `014325` stay text.
#[must_use]
pub fn detect_float(text: &str) -> Option<f64> {
    if text.starts_with('0') && !text.starts_with("0.") {
        return None;
    }
    text.trim().parse::<f64>().ok()
}

/// Detect an integer, including comma-grouped thousands (`1,234,567`).
#[must_use]
pub fn detect_int(text: &str) -> Option<i64> {
    if text.starts_with('0') && text.chars().count() > 1 {
        return None;
    }
    if let Ok(value) = text.trim().parse::<i64>() {
        return Some(value);
    }
    if grouped_digits_regex().is_match(text) {
        return text.replace(',', "").trim().parse::<i64>().ok();
    }
    None
}

/// Whether `value` is integral, i.e. equal to its own floor.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn has_no_digits_in_float(value: f64) -> bool {
    value.is_finite() && value == value.floor()
}

// Comma only checks grouping, not group width: "1,23,4" passes.
// The end anchor tolerates one trailing newline.
fn grouped_digits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[0-9]+,)*[0-9]+\n?\z").expect("valid regex"))
}
