//! Domain records and their storage/wire mappings.
//!
//! Each entity is a statically declared struct with explicit row and JSON
//! conversions; there is no runtime reflection. [`Record`] is the seam the
//! repository layer works through: table name, column set, and row
//! decoding per entity. The JSON side doubles as the wire format consumed
//! and produced by an HTTP layer.

pub mod datetime;
pub mod ingredient;
pub mod meal;
pub mod meal_ingredient;

#[cfg(test)]
mod tests;

pub use ingredient::Ingredient;
pub use meal::Meal;
pub use meal_ingredient::MealIngredient;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::engine::Row;
use crate::error::Result;

/// Storage and wire mapping implemented by every domain record.
///
/// A record is *transient* until an insert assigns its `id` and
/// *persisted* afterwards; nothing ever clears an assigned id.
pub trait Record: Serialize + DeserializeOwned {
    /// Backing table name.
    const TABLE: &'static str;

    /// Column set of the backing table, in declared order.
    fn columns() -> &'static [&'static str];

    /// Builds a record from a result row, applying per-field defaults.
    fn from_row(row: &Row) -> Result<Self>;

    /// Storage identity, if the record has been persisted.
    fn id(&self) -> Option<i64>;

    /// Assigns the storage identity after an insert.
    fn set_id(&mut self, id: i64);

    /// Parses the JSON wire representation. Unknown keys are rejected.
    fn load(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the JSON wire representation.
    fn dump(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
