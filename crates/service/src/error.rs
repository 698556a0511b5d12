use sheetio_types::{LogicalType, TypeError};
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors raised by declared-type conversion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Bad date value {value}")]
    BadDate { value: String },

    #[error(transparent)]
    InvalidFloat(#[from] ParseFloatError),

    #[error(transparent)]
    UnknownType(#[from] TypeError),

    #[error("Missing '{token}' payload for {value_type} cell")]
    MissingPayload {
        value_type: LogicalType,
        token: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
