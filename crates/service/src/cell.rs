//! Reading and writing cells whose type is declared by the format.
//!
//! A tagged cell carries a type name, a set of attributes and its display
//! text. The type name selects the attribute holding the payload and the
//! converter that reads it.

use crate::error::{ConvertError, Result};
use crate::tables::{converter, value_token, write_logical_type};
use sheetio_types::{LogicalType, NumberHint, TypedValue};

/// Read a declared-type cell.
///
/// `payload` looks up an attribute of the cell by name. String cells, types
/// without a converter, and time payloads that do not parse keep the cell
/// `text`.
pub fn read_declared<'a, F>(value_type: &str, payload: F, text: &str) -> Result<TypedValue>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let logical: LogicalType = value_type.parse()?;
    read_logical(logical, payload, text)
}

/// Same as [`read_declared`] for an already-resolved logical type.
pub fn read_logical<'a, F>(logical: LogicalType, payload: F, text: &str) -> Result<TypedValue>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let (Some(token), Some(convert)) = (value_token(logical), converter(logical)) else {
        return Ok(TypedValue::String(text.to_string()));
    };

    let raw = payload(token).ok_or(ConvertError::MissingPayload {
        value_type: logical,
        token,
    })?;

    match convert(raw)? {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(
                "{} payload '{}' did not convert, keeping cell text",
                logical,
                raw
            );
            Ok(TypedValue::String(text.to_string()))
        }
    }
}

/// What a writer emits for a value: the type tag and the attribute that
/// carries the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteType {
    pub logical_type: LogicalType,
    /// `None` when the payload is the cell text itself.
    pub token: Option<&'static str>,
}

/// Resolve the type tag for `value`.
///
/// `hint` marks a number as a percentage or currency; it is ignored for
/// non-numeric values.
#[must_use]
pub fn write_type(value: &TypedValue, hint: Option<NumberHint>) -> WriteType {
    let logical_type = match hint {
        Some(hint) if value.is_numeric() => hint.logical_type(),
        Some(hint) => {
            tracing::trace!("ignoring {:?} hint for {:?} value", hint, value.kind());
            write_logical_type(value.kind())
        }
        None => write_logical_type(value.kind()),
    };
    WriteType {
        logical_type,
        token: value_token(logical_type),
    }
}
