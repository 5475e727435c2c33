//! Entity-level repository over the statement builder and a storage
//! engine.
//!
//! [`MealStorage`] combines statement construction, engine execution, and
//! record mapping into the operations the outer layers call. It
//! exclusively owns the transition from transient record to persisted
//! record: inserts assign ids, and nothing else does.
//!
//! Deletes never cascade; removing a meal or ingredient leaves any
//! `meal_ingredients` rows that reference it.

use std::path::Path;

use crate::conditions::Condition;
use crate::engine::{SqliteEngine, StorageEngine};
use crate::error::Result;
use crate::models::Record;
use crate::sql;
use crate::value::Value;

mod ingredient_ops;
mod meal_ops;


const CREATE_INGREDIENTS_SQL: &str = "CREATE TABLE ingredients (
    id INTEGER PRIMARY KEY,
    name TEXT,
    calories FLOAT DEFAULT 0 NOT NULL,
    fats FLOAT DEFAULT 0 NOT NULL,
    sugar FLOAT DEFAULT 0 NOT NULL,
    veg_protein FLOAT DEFAULT 0 NOT NULL,
    protein FLOAT DEFAULT 0 NOT NULL,
    carbo FLOAT DEFAULT 0 NOT NULL
)";

const CREATE_MEALS_SQL: &str = "CREATE TABLE meals (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    name TEXT
)";

const CREATE_MEAL_INGREDIENTS_SQL: &str = "CREATE TABLE meal_ingredients (
    id INTEGER PRIMARY KEY,
    ingredient_id INTEGER NOT NULL,
    meal_id INTEGER NOT NULL,
    quantity FLOAT NOT NULL,
    FOREIGN KEY(meal_id) REFERENCES meals(id),
    FOREIGN KEY(ingredient_id) REFERENCES ingredients(id)
)";

const CLEAR_TABLES_SQL: [&str; 3] = [
    "DELETE FROM meal_ingredients",
    "DELETE FROM ingredients",
    "DELETE FROM meals",
];

const DROP_TABLES_SQL: [&str; 3] = [
    "DROP TABLE meal_ingredients",
    "DROP TABLE ingredients",
    "DROP TABLE meals",
];

/// Repository façade over ingredients, meals, and meal/ingredient links.
pub struct MealStorage {
    engine: Box<dyn StorageEngine>,
}

impl MealStorage {
    /// Opens the SQLite database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_engine(Box::new(SqliteEngine::open(path)?)))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::with_engine(Box::new(SqliteEngine::open_in_memory()?)))
    }

    /// Wraps an injected engine; tests substitute doubles here.
    pub fn with_engine(engine: Box<dyn StorageEngine>) -> Self {
        Self { engine }
    }

    /// Creates the three tables. Invoked at bootstrap, not per request.
    pub fn init(&self) -> Result<()> {
        self.engine.execute_ddl(&[
            CREATE_INGREDIENTS_SQL,
            CREATE_MEALS_SQL,
            CREATE_MEAL_INGREDIENTS_SQL,
        ])
    }

    /// Empties all three tables, keeping the schema.
    pub fn clear(&self) -> Result<()> {
        self.engine.execute_ddl(&CLEAR_TABLES_SQL)
    }

    /// Drops the three tables. Failures are swallowed so teardown is
    /// idempotent; this is the only place DDL errors are ignored.
    pub fn drop_schema(&self) -> Result<()> {
        for statement in DROP_TABLES_SQL {
            let _ = self.engine.execute_ddl(&[statement]);
        }
        Ok(())
    }

    fn insert_record<T: Record>(&self, mut record: T, fields: Vec<(&str, Value)>) -> Result<T> {
        let id = self.engine.insert(&sql::prepare_insert(T::TABLE, fields))?;
        record.set_id(id);
        Ok(record)
    }

    fn select_records<T: Record>(&self, conds: &[Condition]) -> Result<Vec<T>> {
        let statement = sql::prepare_select(T::TABLE, T::columns(), conds);
        self.engine
            .select(&statement)?
            .iter()
            .map(T::from_row)
            .collect()
    }

    fn delete_records<T: Record>(&self, conds: &[Condition]) -> Result<()> {
        self.engine.execute(&sql::prepare_delete(T::TABLE, conds))
    }
}
