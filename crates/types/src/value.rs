use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime kind of a [`TypedValue`], independent of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Date,
    DateTime,
    Time,
    Duration,
    Bool,
    String,
}

impl ValueKind {
    /// Every value kind, in declaration order.
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Date,
        ValueKind::DateTime,
        ValueKind::Time,
        ValueKind::Duration,
        ValueKind::Bool,
        ValueKind::String,
    ];
}

/// Represents the typed value of a single cell
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Duration(TimeDelta),
    Bool(bool),
    String(String),
}

impl TypedValue {
    /// Runtime kind of this value
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Int(_) => ValueKind::Int,
            TypedValue::Float(_) => ValueKind::Float,
            TypedValue::Date(_) => ValueKind::Date,
            TypedValue::DateTime(_) => ValueKind::DateTime,
            TypedValue::Time(_) => ValueKind::Time,
            TypedValue::Duration(_) => ValueKind::Duration,
            TypedValue::Bool(_) => ValueKind::Bool,
            TypedValue::String(_) => ValueKind::String,
        }
    }

    /// Try to get the value as an integer
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as a float. Integers widen.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(f) => Some(*f),
            TypedValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TypedValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            TypedValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            TypedValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_duration(&self) -> Option<TimeDelta> {
        match self {
            TypedValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the value is numeric (integer or float)
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypedValue::Int(_) | TypedValue::Float(_))
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Int(i) => write!(f, "{i}"),
            TypedValue::Float(fl) => write!(f, "{fl}"),
            TypedValue::Date(d) => write!(f, "{d}"),
            TypedValue::DateTime(dt) => write!(f, "{dt}"),
            TypedValue::Time(t) => write!(f, "{t}"),
            TypedValue::Duration(d) => write!(f, "{d}"),
            TypedValue::Bool(b) => write!(f, "{b}"),
            TypedValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl From<i64> for TypedValue {
    fn from(i: i64) -> Self {
        TypedValue::Int(i)
    }
}

impl From<i32> for TypedValue {
    fn from(i: i32) -> Self {
        TypedValue::Int(i64::from(i))
    }
}

impl From<f64> for TypedValue {
    fn from(f: f64) -> Self {
        TypedValue::Float(f)
    }
}

impl From<NaiveDate> for TypedValue {
    fn from(d: NaiveDate) -> Self {
        TypedValue::Date(d)
    }
}

impl From<NaiveDateTime> for TypedValue {
    fn from(dt: NaiveDateTime) -> Self {
        TypedValue::DateTime(dt)
    }
}

impl From<NaiveTime> for TypedValue {
    fn from(t: NaiveTime) -> Self {
        TypedValue::Time(t)
    }
}

impl From<TimeDelta> for TypedValue {
    fn from(d: TimeDelta) -> Self {
        TypedValue::Duration(d)
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}
