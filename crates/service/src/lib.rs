//! Cell value typing for spreadsheet interchange formats.
//!
//! Readers and writers of delimited-text and markup spreadsheet formats call
//! into this crate once per cell. It never touches a file.
//!
//! # Examples
//!
//! ## Guessing the type of plain text
//!
//! ```
//! use sheetio_service::{detect_date, detect_float, detect_int};
//!
//! assert_eq!(detect_int("1,234,567"), Some(1_234_567));
//! assert_eq!(detect_int("014325"), None);
//! assert_eq!(detect_float("0.5"), Some(0.5));
//! assert!(detect_date("2017-03-21 08:15:00").is_some());
//! ```
//!
//! ## Inferring a cell with options
//!
//! ```
//! use sheetio_service::{infer_cell, DetectOptions};
//! use sheetio_types::TypedValue;
//!
//! let options = DetectOptions::default().with_int(false);
//! assert_eq!(infer_cell("42", &options), TypedValue::Float(42.0));
//! assert_eq!(infer_cell("n/a", &options), TypedValue::from("n/a"));
//! ```
//!
//! ## Converting a declared-type payload
//!
//! ```
//! use sheetio_service::{converter, to_date, to_time};
//! use sheetio_types::{LogicalType, TypedValue};
//!
//! assert!(to_date("2014-12-25T11:11:11").is_ok());
//! assert!(to_date("not-a-date").is_err());
//! assert!(matches!(to_time("PT30H00M00S"), Some(TypedValue::Duration(_))));
//!
//! let read = converter(LogicalType::Float).unwrap();
//! assert_eq!(read("2.5").unwrap(), Some(TypedValue::Float(2.5)));
//! ```
//!
//! ## Choosing the type tag to write
//!
//! ```
//! use sheetio_service::write_type;
//! use sheetio_types::{LogicalType, NumberHint, TypedValue};
//!
//! let tag = write_type(&TypedValue::Int(3), None);
//! assert_eq!(tag.logical_type, LogicalType::Float);
//! assert_eq!(tag.token, Some("value"));
//!
//! let tag = write_type(&TypedValue::Float(0.2), Some(NumberHint::Percentage));
//! assert_eq!(tag.logical_type, LogicalType::Percentage);
//! ```

mod cell;
mod convention;
mod convert;
mod detect;
mod error;
mod infer;
pub mod tables;
mod text;

/// Re-export declared-type cell helpers.
pub use cell::{read_declared, read_logical, write_type, WriteType};
/// Re-export the date/time text conventions.
pub use convention::DateConvention;
/// Re-export strict converters.
pub use convert::{to_boolean, to_date, to_float, to_time};
/// Re-export heuristic detectors.
pub use detect::{detect_date, detect_float, detect_int, has_no_digits_in_float};
/// Re-export conversion error types.
pub use error::{ConvertError, Result};
/// Re-export inference options.
pub use infer::{infer_cell, DetectOptions};
/// Re-export table lookups.
pub use tables::{constructed_kind, converter, value_token, write_logical_type, Converter};
/// Re-export text rendering.
pub use text::{to_declared_text, to_plain_text};
