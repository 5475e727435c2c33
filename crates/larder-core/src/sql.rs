//! SQL statement construction.
//!
//! Pure text and bind-list generation, decoupled from any database client;
//! execution happens behind [`StorageEngine`](crate::engine::StorageEngine).
//! Table and column names are fixed, trusted inputs supplied by the
//! repository layer; only values are user-controlled, and they always
//! travel as bind parameters, never as interpolated text.

use crate::conditions::Condition;
use crate::value::Value;

/// A prepared statement: SQL text plus its ordered bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<Value>,
}

/// Builds a SELECT over `table`. An empty `columns` slice selects `*`.
pub fn prepare_select(table: &str, columns: &[&str], conds: &[Condition]) -> Statement {
    let columns = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(", ")
    };

    let mut sql = format!("SELECT {columns} FROM {table} WHERE 1 = 1");
    let mut binds = Vec::with_capacity(conds.len());
    append_conditions(&mut sql, &mut binds, conds);

    Statement { sql, binds }
}

/// Builds an INSERT for the given field/value pairs, binding values in
/// field order.
pub fn prepare_insert(table: &str, fields: Vec<(&str, Value)>) -> Statement {
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let placeholders = vec!["?"; fields.len()].join(", ");
    let sql = format!(
        "INSERT INTO {table}({}) VALUES({placeholders})",
        names.join(", ")
    );
    let binds = fields.into_iter().map(|(_, value)| value).collect();

    Statement { sql, binds }
}

/// Builds a DELETE constrained by `conds`.
pub fn prepare_delete(table: &str, conds: &[Condition]) -> Statement {
    let mut sql = format!("DELETE FROM {table} WHERE 1 = 1");
    let mut binds = Vec::with_capacity(conds.len());
    append_conditions(&mut sql, &mut binds, conds);

    Statement { sql, binds }
}

/// Builds an UPDATE. SET values bind first in field order, condition
/// values after in condition order.
pub fn prepare_update(table: &str, fields: Vec<(&str, Value)>, conds: &[Condition]) -> Statement {
    let assignments = fields
        .iter()
        .map(|(name, _)| format!("{name} = ?"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!("UPDATE {table} SET {assignments} WHERE 1 = 1");
    let mut binds: Vec<Value> = fields.into_iter().map(|(_, value)| value).collect();
    append_conditions(&mut sql, &mut binds, conds);

    Statement { sql, binds }
}

// The `WHERE 1 = 1` prefix keeps every condition a uniform `AND` clause.
fn append_conditions(sql: &mut String, binds: &mut Vec<Value>, conds: &[Condition]) {
    for cond in conds {
        sql.push_str("\nAND ");
        sql.push_str(&cond.column);
        sql.push(' ');
        sql.push_str(cond.op.as_str());
        sql.push_str(" ?");
        binds.push(cond.value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{eq, like, neq};

    #[test]
    fn select_with_columns_and_conditions() {
        let statement = prepare_select("t", &["a", "b"], &[eq("x", 1), neq("y", "v")]);

        assert_eq!(
            statement.sql,
            "SELECT a, b FROM t WHERE 1 = 1\nAND x = ?\nAND y != ?"
        );
        assert_eq!(
            statement.binds,
            vec![Value::Integer(1), Value::Text("v".to_string())]
        );
    }

    #[test]
    fn select_without_columns_or_conditions() {
        let statement = prepare_select("t", &[], &[]);

        assert_eq!(statement.sql, "SELECT * FROM t WHERE 1 = 1");
        assert_eq!(statement.binds, Vec::new());
    }

    #[test]
    fn insert_binds_in_field_order() {
        let statement = prepare_insert(
            "mytable",
            vec![("uno", 1.into()), ("due", 2.into()), ("tre", 3.into())],
        );

        assert_eq!(
            statement.sql,
            "INSERT INTO mytable(uno, due, tre) VALUES(?, ?, ?)"
        );
        assert_eq!(
            statement.binds,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );
    }

    #[test]
    fn update_binds_set_values_before_condition_values() {
        let statement = prepare_update(
            "mytable",
            vec![("uno", 1.into()), ("due", 2.into()), ("tre", 3.into())],
            &[eq("id", 1), like("name", "%test%")],
        );

        assert_eq!(
            statement.sql,
            "UPDATE mytable SET uno = ?, due = ?, tre = ? WHERE 1 = 1\nAND id = ?\nAND name like ?"
        );
        assert_eq!(
            statement.binds,
            vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3),
                Value::Integer(1),
                Value::Text("%test%".to_string())
            ]
        );
    }

    #[test]
    fn delete_appends_conditions() {
        let statement = prepare_delete("t", &[eq("id", 5)]);

        assert_eq!(statement.sql, "DELETE FROM t WHERE 1 = 1\nAND id = ?");
        assert_eq!(statement.binds, vec![Value::Integer(5)]);
    }
}
