//! Tagged values stored in the execution context.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValueError;

/// Structured value: an ordered map of field names to values.
pub type Record = BTreeMap<String, Value>;

/// A value stored in the context or extracted from a sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text, including words captured by `{name:w}`.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Structured record.
    Record(Record),
}

impl Value {
    /// Returns the human-readable kind of the value.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Record(_) => "record",
        }
    }

    /// Builds a record value from `(field, value)` pairs.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub(crate) fn as_int(&self, name: &str) -> Result<i64, ValueError> {
        match self {
            Self::Int(value) => Ok(*value),
            other => Err(other.mismatch(name, "integer")),
        }
    }

    pub(crate) fn as_float(&self, name: &str) -> Result<f64, ValueError> {
        match self {
            Self::Float(value) => Ok(*value),
            other => Err(other.mismatch(name, "float")),
        }
    }

    pub(crate) fn as_text(&self, name: &str) -> Result<&str, ValueError> {
        match self {
            Self::Text(value) => Ok(value),
            other => Err(other.mismatch(name, "text")),
        }
    }

    pub(crate) fn as_flag(&self, name: &str) -> Result<bool, ValueError> {
        match self {
            Self::Bool(value) => Ok(*value),
            other => Err(other.mismatch(name, "boolean")),
        }
    }

    pub(crate) fn as_record(&self, name: &str) -> Result<&Record, ValueError> {
        match self {
            Self::Record(record) => Ok(record),
            other => Err(other.mismatch(name, "record")),
        }
    }

    fn mismatch(&self, name: &str, expected: &'static str) -> ValueError {
        ValueError::KindMismatch {
            name: name.to_owned(),
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Record(record) => {
                f.write_str("{")?;
                for (index, (key, value)) in record.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}
