//! Typed field values
//!
//! Accessors produce a `FieldValue`; literals from the wire are turned into
//! one and coerced to the accessor's declared `ValueKind` at compile time.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::StatusValue;

/// Declared type of an accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Date,
    Duration,
    Status,
    Boolean,
    Array,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Date => "date",
            ValueKind::Duration => "duration",
            ValueKind::Status => "status",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
        }
    }

    /// Rank used to order values of different kinds when sorting
    fn rank(&self) -> u8 {
        match self {
            ValueKind::Boolean => 1,
            ValueKind::Number => 2,
            ValueKind::Status => 3,
            ValueKind::Duration => 4,
            ValueKind::Date => 5,
            ValueKind::String => 6,
            ValueKind::Array => 7,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field value read from an entity, or a coerced literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Absent value: unset date/duration, or a missing option key
    Null,
    String(String),
    Number(i64),
    Date(DateTime<Utc>),
    Duration(Duration),
    /// Status ordinal
    Status(i32),
    Boolean(bool),
    Array(Vec<String>),
}

impl FieldValue {
    pub fn status(status: impl StatusValue) -> Self {
        FieldValue::Status(status.ordinal())
    }

    /// Kind of this value, `None` for null
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            FieldValue::Null => None,
            FieldValue::String(_) => Some(ValueKind::String),
            FieldValue::Number(_) => Some(ValueKind::Number),
            FieldValue::Date(_) => Some(ValueKind::Date),
            FieldValue::Duration(_) => Some(ValueKind::Duration),
            FieldValue::Status(_) => Some(ValueKind::Status),
            FieldValue::Boolean(_) => Some(ValueKind::Boolean),
            FieldValue::Array(_) => Some(ValueKind::Array),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this value to `kind`, only if kinds differ.
    ///
    /// Null stays null. Numbers and status ordinals convert into each other;
    /// every other mismatch is refused and the literal's kind returned.
    pub fn coerce_to(self, kind: ValueKind) -> Result<FieldValue, ValueKind> {
        let own = match self.kind() {
            None => return Ok(self),
            Some(own) if own == kind => return Ok(self),
            Some(own) => own,
        };

        match (self, kind) {
            (FieldValue::Number(n), ValueKind::Status) => {
                i32::try_from(n).map(FieldValue::Status).map_err(|_| own)
            }
            (FieldValue::Status(s), ValueKind::Number) => Ok(FieldValue::Number(i64::from(s))),
            _ => Err(own),
        }
    }

    /// Natural ordering between two non-null values of the same kind.
    ///
    /// Lexicographic for strings, numeric for numbers, chronological for
    /// dates, magnitude for durations, ordinal for statuses.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Duration(a), FieldValue::Duration(b)) => Some(a.cmp(b)),
            (FieldValue::Status(a), FieldValue::Status(b)) => Some(a.cmp(b)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::Array(a), FieldValue::Array(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total order used for sorting: null first, then by kind, then naturally
    pub fn sort_cmp(&self, other: &FieldValue) -> Ordering {
        match (self.kind(), other.kind()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) if a != b => a.rank().cmp(&b.rank()),
            _ => self.compare(other).unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::String(s) => write!(f, "{:?}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            FieldValue::Duration(d) => write!(f, "{:?}", d),
            FieldValue::Status(s) => write!(f, "#{}", s),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Array(items) => write!(f, "{:?}", items),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Duration> for FieldValue {
    fn from(value: Duration) -> Self {
        FieldValue::Duration(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Array(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
