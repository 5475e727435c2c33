//! Meal record definition.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{datetime, MealIngredient, Record};
use crate::engine::Row;
use crate::error::Result;
use crate::value::Value;

/// A meal eaten at some date.
///
/// The `meal_ingredients` collection is only meaningful in memory before
/// persistence; at rest the relationship lives on
/// `meal_ingredients.meal_id`, and reads leave the collection empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meal {
    /// Storage identity, assigned on first insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Wire format `YYYY-MM-DD HH:MM`; defaults to now when absent
    #[serde(default = "datetime::now_minute", with = "datetime::wire")]
    pub date: DateTime,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meal_ingredients: Vec<MealIngredient>,
}

impl Meal {
    /// Field/value pairs for the flat `meals` row. `id` and the nested
    /// `meal_ingredients` collection are not columns.
    pub fn insert_row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", self.name.clone().into()),
            ("date", datetime::format(&self.date).into()),
        ]
    }
}

impl Default for Meal {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            date: datetime::now_minute(),
            meal_ingredients: Vec::new(),
        }
    }
}

impl Record for Meal {
    const TABLE: &'static str = "meals";

    fn columns() -> &'static [&'static str] {
        &["id", "name", "date"]
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            name: row.opt_text("name")?,
            date: datetime::parse(&row.text("date")?)?,
            meal_ingredients: Vec::new(),
        })
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
