//! Ingredient record definition.

use serde::{Deserialize, Serialize};

use super::Record;
use crate::engine::Row;
use crate::error::Result;
use crate::value::Value;

/// A food ingredient with its nutritional values.
///
/// Numeric fields default to zero when absent from the wire input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    /// Storage identity, assigned on first insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub fats: f64,

    #[serde(default)]
    pub sugar: f64,

    #[serde(default)]
    pub veg_protein: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbo: f64,
}

impl Ingredient {
    /// Field/value pairs for the flat table row. `id` is
    /// storage-assigned and never written.
    pub fn insert_row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", self.name.as_str().into()),
            ("calories", self.calories.into()),
            ("fats", self.fats.into()),
            ("sugar", self.sugar.into()),
            ("veg_protein", self.veg_protein.into()),
            ("protein", self.protein.into()),
            ("carbo", self.carbo.into()),
        ]
    }
}

impl Record for Ingredient {
    const TABLE: &'static str = "ingredients";

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "calories",
            "fats",
            "sugar",
            "veg_protein",
            "protein",
            "carbo",
        ]
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            name: row.opt_text("name")?.unwrap_or_default(),
            calories: row.real("calories")?,
            fats: row.real("fats")?,
            sugar: row.real("sugar")?,
            veg_protein: row.real("veg_protein")?,
            protein: row.real("protein")?,
            carbo: row.real("carbo")?,
        })
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
