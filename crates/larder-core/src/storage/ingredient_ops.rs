//! Ingredient operations.

use crate::conditions::{eq, Condition};
use crate::error::{Result, StorageError};
use crate::models::{Ingredient, Record};
use crate::sql;

impl super::MealStorage {
    /// Inserts the ingredient and returns it with `id` assigned.
    pub fn add_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient> {
        let fields = ingredient.insert_row();
        self.insert_record(ingredient, fields)
    }

    /// Inserts every ingredient that has no `id` yet; already persisted
    /// records pass through untouched.
    pub fn add_ingredients(&self, ingredients: Vec<Ingredient>) -> Result<Vec<Ingredient>> {
        ingredients
            .into_iter()
            .map(|ingredient| {
                if ingredient.id.is_some() {
                    Ok(ingredient)
                } else {
                    self.add_ingredient(ingredient)
                }
            })
            .collect()
    }

    /// Retrieves ingredients matching all `conds`.
    pub fn get_ingredients(&self, conds: &[Condition]) -> Result<Vec<Ingredient>> {
        self.select_records(conds)
    }

    /// Retrieves a single ingredient by id.
    pub fn get_ingredient(&self, id: i64) -> Result<Option<Ingredient>> {
        Ok(self.get_ingredients(&[eq("id", id)])?.into_iter().next())
    }

    /// Deletes ingredients matching all `conds`; no-op when none match.
    pub fn delete_ingredient(&self, conds: &[Condition]) -> Result<()> {
        self.delete_records::<Ingredient>(conds)
    }

    /// Rewrites all non-id fields of a persisted ingredient.
    pub fn update_ingredient(&self, ingredient: &Ingredient) -> Result<()> {
        let id = ingredient.id.ok_or_else(|| {
            StorageError::invalid_input("id", "cannot update a transient ingredient")
        })?;
        let statement = sql::prepare_update(Ingredient::TABLE, ingredient.insert_row(), &[eq("id", id)]);
        self.engine.execute(&statement)
    }
}
