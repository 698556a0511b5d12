//! Static lookup tables between logical types, payload tokens, converters
//! and runtime value kinds.
//!
//! The tables are plain `static` arrays, immutable for the life of the
//! process and safe to read from any thread.

use crate::convert::{to_boolean, to_date, to_float, to_time};
use crate::error::Result;
use sheetio_types::{LogicalType, TypedValue, ValueKind};

/// Read-side converter: payload text to a typed value, `Ok(None)` when a
/// speculative converter finds no match.
pub type Converter = fn(&str) -> Result<Option<TypedValue>>;

/// Logical type to the converter a reader dispatches declared payloads to.
pub static VALUE_CONVERTERS: [(LogicalType, Converter); 7] = [
    (LogicalType::Float, read_float),
    (LogicalType::Date, read_date),
    (LogicalType::Time, read_time),
    (LogicalType::TimeDelta, read_time),
    (LogicalType::Boolean, read_boolean),
    (LogicalType::Percentage, read_float),
    (LogicalType::Currency, read_float),
];

/// Logical type to the attribute that holds its payload in a tagged cell.
/// String cells keep their payload in the cell text and have no token.
pub static VALUE_TOKENS: [(LogicalType, &str); 7] = [
    (LogicalType::Float, "value"),
    (LogicalType::Date, "date-value"),
    (LogicalType::Time, "time-value"),
    (LogicalType::TimeDelta, "time-value"),
    (LogicalType::Boolean, "boolean-value"),
    (LogicalType::Percentage, "value"),
    (LogicalType::Currency, "value"),
];

/// Logical type to the kind of value a reader constructs for it.
pub static FORMAT_CONVERSION: [(LogicalType, ValueKind); 7] = [
    (LogicalType::Float, ValueKind::Float),
    (LogicalType::Date, ValueKind::Date),
    (LogicalType::Time, ValueKind::Time),
    (LogicalType::TimeDelta, ValueKind::Duration),
    (LogicalType::Boolean, ValueKind::Bool),
    (LogicalType::Percentage, ValueKind::Float),
    (LogicalType::Currency, ValueKind::Float),
];

/// Runtime value kind to the logical type a writer emits.
///
/// Integers and floats both collapse to `float`. Datetimes share `date`
/// with plain dates.
pub static WRITE_FORMAT_CONVERSION: [(ValueKind, LogicalType); 8] = [
    (ValueKind::Float, LogicalType::Float),
    (ValueKind::Int, LogicalType::Float),
    (ValueKind::String, LogicalType::String),
    (ValueKind::Date, LogicalType::Date),
    (ValueKind::DateTime, LogicalType::Date),
    (ValueKind::Time, LogicalType::Time),
    (ValueKind::Duration, LogicalType::TimeDelta),
    (ValueKind::Bool, LogicalType::Boolean),
];

/// Converter registered for `logical`, if any.
#[must_use]
pub fn converter(logical: LogicalType) -> Option<Converter> {
    VALUE_CONVERTERS
        .iter()
        .find(|(t, _)| *t == logical)
        .map(|(_, f)| *f)
}

/// Payload token for `logical`; `None` for `string`.
#[must_use]
pub fn value_token(logical: LogicalType) -> Option<&'static str> {
    VALUE_TOKENS
        .iter()
        .find(|(t, _)| *t == logical)
        .map(|(_, token)| *token)
}

/// Value kind a reader constructs for `logical`; `None` for `string`.
#[must_use]
pub fn constructed_kind(logical: LogicalType) -> Option<ValueKind> {
    FORMAT_CONVERSION
        .iter()
        .find(|(t, _)| *t == logical)
        .map(|(_, kind)| *kind)
}

/// Logical type a writer emits for a value of `kind`.
#[must_use]
pub fn write_logical_type(kind: ValueKind) -> LogicalType {
    WRITE_FORMAT_CONVERSION
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(LogicalType::String, |(_, t)| *t)
}

fn read_float(text: &str) -> Result<Option<TypedValue>> {
    to_float(text).map(|f| Some(TypedValue::Float(f)))
}

fn read_date(text: &str) -> Result<Option<TypedValue>> {
    to_date(text).map(Some)
}

fn read_time(text: &str) -> Result<Option<TypedValue>> {
    Ok(to_time(text))
}

fn read_boolean(text: &str) -> Result<Option<TypedValue>> {
    Ok(Some(TypedValue::Bool(to_boolean(text))))
}
