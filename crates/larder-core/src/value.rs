//! SQL values shared by conditions, statements, and result rows.

use rusqlite::types::{ToSqlOutput, Value as SqliteValue};
use rusqlite::ToSql;

/// A single SQL value, used both as a bind parameter and as a result-set
/// cell. `Null` represents SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
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

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self {
            Value::Null => SqliteValue::Null,
            Value::Integer(v) => SqliteValue::Integer(*v),
            Value::Real(v) => SqliteValue::Real(*v),
            Value::Text(v) => SqliteValue::Text(v.clone()),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}
