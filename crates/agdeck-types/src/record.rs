use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// Text shown in place of a missing field value
pub const MISSING_PLACEHOLDER: &str = "--";

/// A single field value exposed by a [`Record`].
///
/// Each column is expected to carry one semantic kind across all records.
/// `Ordinal` covers enum-typed fields: it sorts by `rank` and displays `label`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Number(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Ordinal { rank: u32, label: String },
}

impl Value {
    pub fn ordinal(rank: u32, label: impl Into<String>) -> Self {
        Value::Ordinal {
            rank,
            label: label.into(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str(MISSING_PLACEHOLDER),
            Value::Text(text) => f.write_str(text),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Number(n) => write!(f, "{}", n),
            Value::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Value::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Ordinal { label, .. } => f.write_str(label),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Backing data for one table row.
///
/// `field` returns `None` only when the record has no field named `key`;
/// a field that exists but holds no value is `Some(Value::Null)`.
pub trait Record {
    fn id(&self) -> &str;

    fn field(&self, key: &str) -> Option<Value>;
}
