use thiserror::Error;

/// Errors raised while resolving type names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Unknown logical type: {name}")]
    UnknownLogicalType { name: String },
}
