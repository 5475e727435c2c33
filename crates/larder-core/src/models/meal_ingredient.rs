//! Meal/ingredient link record definition.

use serde::{Deserialize, Serialize};

use super::{Ingredient, Record};
use crate::engine::Row;
use crate::error::Result;
use crate::value::Value;

/// Links one ingredient into one meal with a quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MealIngredient {
    /// Storage identity, assigned on first insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<i64>,

    /// Amount of the ingredient in the meal
    pub quantity: f64,

    /// The ingredient this link was built from. Never a column; an
    /// unsaved ingredient here is cascade-inserted before the link row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Ingredient>,
}

impl MealIngredient {
    /// Field/value pairs for the flat table row. `id` and the in-memory
    /// `ingredient` reference are not columns.
    pub fn insert_row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("meal_id", self.meal_id.into()),
            ("ingredient_id", self.ingredient_id.into()),
            ("quantity", self.quantity.into()),
        ]
    }
}

impl Record for MealIngredient {
    const TABLE: &'static str = "meal_ingredients";

    fn columns() -> &'static [&'static str] {
        &["id", "meal_id", "ingredient_id", "quantity"]
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            meal_id: Some(row.integer("meal_id")?),
            ingredient_id: Some(row.integer("ingredient_id")?),
            quantity: row.real("quantity")?,
            ingredient: None,
        })
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
