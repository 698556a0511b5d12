use crate::detect::{detect_date, detect_float, detect_int};
use serde::{Deserialize, Serialize};
use sheetio_types::TypedValue;

/// Type inference options for cells read from delimited text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectOptions {
    /// Try integer detection (default: true)
    pub auto_detect_int: bool,
    /// Try float detection (default: true)
    pub auto_detect_float: bool,
    /// Try date/datetime detection (default: true)
    pub auto_detect_datetime: bool,
    /// Keep text that would detect as an infinite float (default: true)
    pub ignore_infinity: bool,
    /// Keep text that would detect as NaN (default: true)
    pub ignore_nan: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        DetectOptions {
            auto_detect_int: true,
            auto_detect_float: true,
            auto_detect_datetime: true,
            ignore_infinity: true,
            ignore_nan: true,
        }
    }
}

impl DetectOptions {
    /// Options that keep every cell as text
    #[must_use]
    pub fn text_only() -> Self {
        DetectOptions {
            auto_detect_int: false,
            auto_detect_float: false,
            auto_detect_datetime: false,
            ..Default::default()
        }
    }

    /// Set whether to detect integers
    #[must_use]
    pub fn with_int(mut self, enabled: bool) -> Self {
        self.auto_detect_int = enabled;
        self
    }

    /// Set whether to detect floats
    #[must_use]
    pub fn with_float(mut self, enabled: bool) -> Self {
        self.auto_detect_float = enabled;
        self
    }

    /// Set whether to detect dates and datetimes
    #[must_use]
    pub fn with_datetime(mut self, enabled: bool) -> Self {
        self.auto_detect_datetime = enabled;
        self
    }

    /// Set whether infinite floats stay text
    #[must_use]
    pub fn with_ignore_infinity(mut self, ignore: bool) -> Self {
        self.ignore_infinity = ignore;
        self
    }

    /// Set whether NaN stays text
    #[must_use]
    pub fn with_ignore_nan(mut self, ignore: bool) -> Self {
        self.ignore_nan = ignore;
        self
    }

    fn accepts_float(&self, value: f64) -> bool {
        !((self.ignore_infinity && value.is_infinite()) || (self.ignore_nan && value.is_nan()))
    }
}

/// Infer the value of an untyped cell.
///
/// Tries: int -> float -> date, each only when enabled, and falls back to
/// the text itself.
#[must_use]
pub fn infer_cell(text: &str, options: &DetectOptions) -> TypedValue {
    if options.auto_detect_int {
        if let Some(i) = detect_int(text) {
            return TypedValue::Int(i);
        }
    }

    if options.auto_detect_float {
        if let Some(f) = detect_float(text).filter(|f| options.accepts_float(*f)) {
            return TypedValue::Float(f);
        }
    }

    if options.auto_detect_datetime {
        if let Some(value) = detect_date(text) {
            return value;
        }
    }

    TypedValue::String(text.to_string())
}
