//! Statement execution against the underlying store.
//!
//! [`StorageEngine`] is the narrow seam between statement construction and
//! a concrete database client. [`SqliteEngine`] is the one real
//! implementation; test doubles substitute through the trait to capture
//! statements without touching a database.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};

use crate::error::{DatabaseResultExt, Result, StorageError};
use crate::sql::Statement;
use crate::value::Value;

/// One result-set row: column names and values in result order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// The raw value of `column`, if present in the result set.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|index| &self.values[index])
    }

    /// Reads a non-null INTEGER column.
    pub fn integer(&self, column: &str) -> Result<i64> {
        match self.require(column)? {
            Value::Integer(v) => Ok(*v),
            other => Err(type_error(column, "INTEGER", other)),
        }
    }

    /// Reads a numeric column. SQLite hands back INTEGER for whole
    /// numbers even under REAL affinity, so both storage classes are
    /// accepted.
    pub fn real(&self, column: &str) -> Result<f64> {
        match self.require(column)? {
            Value::Real(v) => Ok(*v),
            Value::Integer(v) => Ok(*v as f64),
            other => Err(type_error(column, "REAL", other)),
        }
    }

    /// Reads a non-null TEXT column.
    pub fn text(&self, column: &str) -> Result<String> {
        match self.require(column)? {
            Value::Text(v) => Ok(v.clone()),
            other => Err(type_error(column, "TEXT", other)),
        }
    }

    /// Reads a nullable TEXT column.
    pub fn opt_text(&self, column: &str) -> Result<Option<String>> {
        match self.require(column)? {
            Value::Null => Ok(None),
            Value::Text(v) => Ok(Some(v.clone())),
            other => Err(type_error(column, "TEXT", other)),
        }
    }

    fn require(&self, column: &str) -> Result<&Value> {
        self.get(column)
            .ok_or_else(|| StorageError::invalid_input(column, "column missing from result row"))
    }
}

fn type_error(column: &str, expected: &str, got: &Value) -> StorageError {
    StorageError::invalid_input(column, format!("expected {expected} value, got {got:?}"))
}

/// Narrow execution interface between the statement builder and a
/// concrete store.
pub trait StorageEngine {
    /// Executes an INSERT and returns the generated row id.
    fn insert(&self, statement: &Statement) -> Result<i64>;

    /// Executes a SELECT and materializes the full row set.
    fn select(&self, statement: &Statement) -> Result<Vec<Row>>;

    /// Executes a statement with no result (UPDATE/DELETE).
    fn execute(&self, statement: &Statement) -> Result<()>;

    /// Runs schema-definition statements. Bootstrap only, never part of
    /// request handling.
    fn execute_ddl(&self, statements: &[&str]) -> Result<()>;
}

/// [`StorageEngine`] over an embedded SQLite database.
///
/// Every call commits on its own; there is no cross-statement
/// transaction scope.
pub struct SqliteEngine {
    connection: Connection,
}

impl SqliteEngine {
    /// Opens the database file at `path`, creating it if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;
        Ok(Self { connection })
    }

    /// Opens a private in-memory database, useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Ok(Self { connection })
    }
}

impl StorageEngine for SqliteEngine {
    fn insert(&self, statement: &Statement) -> Result<i64> {
        self.connection
            .execute(&statement.sql, params_from_iter(statement.binds.iter()))
            .db_context("Failed to execute insert")?;
        Ok(self.connection.last_insert_rowid())
    }

    fn select(&self, statement: &Statement) -> Result<Vec<Row>> {
        let mut stmt = self
            .connection
            .prepare(&statement.sql)
            .db_context("Failed to prepare query")?;
        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        let mut rows = stmt
            .query(params_from_iter(statement.binds.iter()))
            .db_context("Failed to execute query")?;

        let mut result = Vec::new();
        while let Some(row) = rows.next().db_context("Failed to fetch row")? {
            let mut values = Vec::with_capacity(columns.len());
            for (index, column) in columns.iter().enumerate() {
                let value = match row.get_ref(index).db_context("Failed to read column")? {
                    ValueRef::Null => Value::Null,
                    ValueRef::Integer(v) => Value::Integer(v),
                    ValueRef::Real(v) => Value::Real(v),
                    ValueRef::Text(v) => Value::Text(String::from_utf8_lossy(v).into_owned()),
                    ValueRef::Blob(_) => {
                        return Err(StorageError::invalid_input(
                            column.clone(),
                            "BLOB columns are not supported",
                        ));
                    }
                };
                values.push(value);
            }
            result.push(Row::new(columns.clone(), values));
        }

        Ok(result)
    }

    fn execute(&self, statement: &Statement) -> Result<()> {
        self.connection
            .execute(&statement.sql, params_from_iter(statement.binds.iter()))
            .db_context("Failed to execute statement")?;
        Ok(())
    }

    fn execute_ddl(&self, statements: &[&str]) -> Result<()> {
        for sql in statements {
            self.connection
                .execute_batch(sql)
                .db_context("Failed to execute schema statement")?;
        }
        Ok(())
    }
}
