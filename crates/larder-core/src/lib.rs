//! Core library for the larder nutrition-tracking backend.
//!
//! This crate provides the storage core for ingredients, meals, and the
//! links between them: a condition builder for filter predicates, a SQL
//! statement builder, a narrow storage-engine seam over SQLite,
//! statically declared domain records with row and JSON mappings, and the
//! [`MealStorage`] repository façade tying them together. [`Larder`]
//! wraps the façade for async callers such as an HTTP layer or the CLI.
//!
//! The JSON side of the record mapping is the wire contract: an HTTP
//! layer parses request bodies with [`Record::load`] and renders
//! responses with [`Record::dump`], turning `Ok(None)` lookups into 404s
//! and deserialization failures into 400s.
//!
//! # Quick Start
//!
//! ```rust
//! use larder_core::{conditions::eq, models::Ingredient, LarderBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (and on first use, initialize) a larder database
//! let larder = LarderBuilder::new()
//!     .with_database_path(Some("larder.db"))
//!     .build()
//!     .await?;
//!
//! // Persist a transient record; the insert assigns its id
//! let added = larder
//!     .add_ingredient(Ingredient {
//!         name: "avocado".to_string(),
//!         calories: 160.0,
//!         ..Default::default()
//!     })
//!     .await?;
//! assert!(added.id.is_some());
//!
//! // Filter with conditions
//! let found = larder.get_ingredients(vec![eq("name", "avocado")]).await?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod conditions;
pub mod engine;
pub mod error;
pub mod larder;
pub mod models;
pub mod sql;
pub mod storage;
pub mod value;

// Re-export commonly used types
pub use conditions::{eq, gt, like, lt, neq, Condition, Op};
pub use engine::{Row, SqliteEngine, StorageEngine};
pub use error::{Result, StorageError};
pub use larder::{Larder, LarderBuilder};
pub use models::{Ingredient, Meal, MealIngredient, Record};
pub use sql::{prepare_delete, prepare_insert, prepare_select, prepare_update, Statement};
pub use storage::MealStorage;
pub use value::Value;
