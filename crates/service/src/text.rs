//! Text rendering of typed values, the inverse of detection and conversion.

use crate::convention::DateConvention;
use chrono::{NaiveDateTime, TimeDelta, Timelike};
use sheetio_types::TypedValue;

/// Render the payload a markup writer stores under the value's token.
///
/// The output is what the declared-type converters read back: `T`-separated
/// datetimes and `PT..H..M..S` times and durations.
///
/// Durations lose sub-second precision. A duration under 24 hours renders
/// like a time of day and reads back as [`TypedValue::Time`]. A negative
/// duration gets a leading `-` and does not read back at all.
#[must_use]
pub fn to_declared_text(value: &TypedValue) -> String {
    match value {
        TypedValue::DateTime(dt) => format_datetime(dt, DateConvention::Iso),
        TypedValue::Time(t) => format!("PT{:02}H{:02}M{:02}S", t.hour(), t.minute(), t.second()),
        TypedValue::Duration(d) => format_duration(*d),
        other => other.to_string(),
    }
}

/// Render the text a delimited-text writer emits, which `detect_*` reads
/// back.
#[must_use]
pub fn to_plain_text(value: &TypedValue) -> String {
    match value {
        TypedValue::DateTime(dt) => format_datetime(dt, DateConvention::Spaced),
        TypedValue::Time(t) => t.format("%H:%M:%S").to_string(),
        other => other.to_string(),
    }
}

// Microseconds only when non-zero; finer precision is dropped.
fn format_datetime(dt: &NaiveDateTime, convention: DateConvention) -> String {
    let mut text = dt.format(convention.datetime_format()).to_string();
    let micros = dt.nanosecond() % 1_000_000_000 / 1_000;
    if micros != 0 {
        text.push_str(&format!(".{micros:06}"));
    }
    text
}

fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{sign}PT{:02}H{:02}M{:02}S",
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}
