//! # sheetio-types
//!
//! Shared vocabulary for spreadsheet cell typing.
//!
//! This crate defines the closed set of logical cell types a markup format
//! can declare ([`LogicalType`]), the in-memory value every reader produces
//! ([`TypedValue`]) and the runtime kind of such a value ([`ValueKind`]).
//! It has no decision logic of its own; detection and conversion live in
//! `sheetio-service`.
//!
//! ```
//! use sheetio_types::{LogicalType, TypedValue, ValueKind};
//!
//! let declared: LogicalType = "timedelta".parse().unwrap();
//! assert_eq!(declared, LogicalType::TimeDelta);
//!
//! let value = TypedValue::from(42_i64);
//! assert_eq!(value.kind(), ValueKind::Int);
//! ```

mod error;
mod logical;
mod value;

pub use error::TypeError;
pub use logical::{LogicalType, NumberHint};
pub use value::{TypedValue, ValueKind};
