//! Strict converters for cells whose type the source format declares.
//!
//! Date and float conversion treat malformed text as an error because the
//! declared type and the payload disagree. The time converter is also used
//! speculatively and reports a mismatch as `None`.

use crate::convention::DateConvention;
use crate::error::{ConvertError, Result};
use chrono::{NaiveTime, TimeDelta};
use regex::Regex;
use sheetio_types::TypedValue;
use std::sync::OnceLock;

/// Parse a declared float payload.
pub fn to_float(text: &str) -> Result<f64> {
    Ok(text.trim().parse::<f64>()?)
}

/// Parse a declared date payload (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`,
/// or the same with up to six fractional second digits).
pub fn to_date(text: &str) -> Result<TypedValue> {
    DateConvention::Iso
        .parse(text)
        .ok_or_else(|| ConvertError::BadDate {
            value: text.to_string(),
        })
}

/// Parse a `PT<H>H<M>M<S>S` payload.
///
/// Hours below 24 produce a time of day, 24 and above a duration. Text that
/// does not start with the pattern, or whose fields do not fit, is `None`.
#[must_use]
pub fn to_time(text: &str) -> Option<TypedValue> {
    let caps = duration_regex().captures(text)?;
    let hours: i64 = caps[1].parse().ok()?;
    let minutes: i64 = caps[2].parse().ok()?;
    let seconds: i64 = caps[3].parse().ok()?;

    if hours < 24 {
        NaiveTime::from_hms_opt(
            u32::try_from(hours).ok()?,
            u32::try_from(minutes).ok()?,
            u32::try_from(seconds).ok()?,
        )
        .map(TypedValue::Time)
    } else {
        TimeDelta::try_hours(hours)?
            .checked_add(&TimeDelta::try_minutes(minutes)?)?
            .checked_add(&TimeDelta::try_seconds(seconds)?)
            .map(TypedValue::Duration)
    }
}

/// Only the exact literal `true` is true; everything else is false.
#[must_use]
pub fn to_boolean(text: &str) -> bool {
    text == "true"
}

// Anchored at the start only, trailing text is ignored.
fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^PT([0-9]+)H([0-9]+)M([0-9]+)S").expect("valid regex"))
}
