//! Builder for creating and configuring Larder instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Larder;
use crate::error::{Result, StorageError};
use crate::storage::MealStorage;

/// Builder for creating and configuring [`Larder`] handles.
#[derive(Debug, Clone)]
pub struct LarderBuilder {
    database_path: Option<PathBuf>,
}

impl LarderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/larder/larder.db` or `~/.local/share/larder/larder.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured handle.
    ///
    /// A database file that does not exist yet gets its schema created;
    /// an existing file is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileSystem` if the database path is invalid
    /// Returns `StorageError::Database` if schema creation fails
    pub async fn build(self) -> Result<Larder> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let fresh = !db_path.exists();
        let path = db_path.clone();
        task::spawn_blocking(move || {
            let storage = MealStorage::open(&path)?;
            if fresh {
                storage.init()?;
            }
            Ok::<(), StorageError>(())
        })
        .await
        .map_err(|e| StorageError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Larder::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("larder")
            .place_data_file("larder.db")
            .map_err(|e| StorageError::XdgDirectory(e.to_string()))
    }
}

impl Default for LarderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
