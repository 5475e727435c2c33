//! Async façade over [`MealStorage`] for embedding in servers and CLIs.
//!
//! [`Larder`] mirrors the storage API one to one. Each operation opens its
//! own connection on a blocking task and commits before returning, so a
//! handle can be shared across tasks without coordination.

use std::path::PathBuf;

use tokio::task;

use crate::error::{Result, StorageError};
use crate::storage::MealStorage;

mod builder;
mod ingredient_ops;
mod meal_ops;

pub use builder::LarderBuilder;

/// Handle to a larder database.
pub struct Larder {
    pub(crate) db_path: PathBuf,
}

impl Larder {
    /// Creates a new handle for the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs `op` against a freshly opened [`MealStorage`] on the blocking
    /// pool.
    async fn with_storage<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&MealStorage) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let storage = MealStorage::open(&db_path)?;
            op(&storage)
        })
        .await
        .map_err(|e| StorageError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates the schema.
    pub async fn init(&self) -> Result<()> {
        self.with_storage(MealStorage::init).await
    }

    /// Empties all tables, keeping the schema.
    pub async fn clear(&self) -> Result<()> {
        self.with_storage(MealStorage::clear).await
    }

    /// Drops the schema; missing tables are ignored.
    pub async fn drop_schema(&self) -> Result<()> {
        self.with_storage(MealStorage::drop_schema).await
    }
}
