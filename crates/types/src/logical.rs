use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical type a format declares for a cell.
///
/// The set is closed. Names follow the ODF `office:value-type` vocabulary,
/// with `timedelta` standing in for a time value of 24 hours or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    Float,
    Date,
    Time,
    TimeDelta,
    Boolean,
    Percentage,
    Currency,
    String,
}

impl LogicalType {
    /// Every logical type, in declaration order.
    pub const ALL: [LogicalType; 8] = [
        LogicalType::Float,
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::TimeDelta,
        LogicalType::Boolean,
        LogicalType::Percentage,
        LogicalType::Currency,
        LogicalType::String,
    ];

    /// The name a format uses for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LogicalType::Float => "float",
            LogicalType::Date => "date",
            LogicalType::Time => "time",
            LogicalType::TimeDelta => "timedelta",
            LogicalType::Boolean => "boolean",
            LogicalType::Percentage => "percentage",
            LogicalType::Currency => "currency",
            LogicalType::String => "string",
        }
    }

    /// Whether values of this type travel through the float pathway.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            LogicalType::Float | LogicalType::Percentage | LogicalType::Currency
        )
    }
}

impl FromStr for LogicalType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TypeError::UnknownLogicalType {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formatting hint a writer attaches to a numeric value.
///
/// Percentages and currencies have no runtime kind of their own; a writer
/// that knows a number is one of them says so with this hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberHint {
    Percentage,
    Currency,
}

impl NumberHint {
    #[must_use]
    pub const fn logical_type(self) -> LogicalType {
        match self {
            NumberHint::Percentage => LogicalType::Percentage,
            NumberHint::Currency => LogicalType::Currency,
        }
    }
}
