//! Meal and meal/ingredient link operations for the async façade.

use crate::conditions::Condition;
use crate::error::Result;
use crate::models::{Meal, MealIngredient};

impl super::Larder {
    /// Inserts the meal and its nested meal ingredients, cascading as
    /// needed, and returns the persisted meal.
    pub async fn add_meal(&self, meal: Meal) -> Result<Meal> {
        self.with_storage(move |storage| storage.add_meal(meal)).await
    }

    /// Retrieves meals matching all `conds`.
    pub async fn get_meals(&self, conds: Vec<Condition>) -> Result<Vec<Meal>> {
        self.with_storage(move |storage| storage.get_meals(&conds))
            .await
    }

    /// Retrieves a single meal by id.
    pub async fn get_meal(&self, id: i64) -> Result<Option<Meal>> {
        self.with_storage(move |storage| storage.get_meal(id)).await
    }

    /// Deletes meals matching all `conds`; referencing link rows are
    /// kept.
    pub async fn delete_meal(&self, conds: Vec<Condition>) -> Result<()> {
        self.with_storage(move |storage| storage.delete_meal(&conds))
            .await
    }

    /// Inserts one link row, cascade-inserting an unsaved nested
    /// ingredient first.
    pub async fn add_meal_ingredient(
        &self,
        meal_ingredient: MealIngredient,
    ) -> Result<MealIngredient> {
        self.with_storage(move |storage| storage.add_meal_ingredient(meal_ingredient))
            .await
    }

    /// Retrieves link rows matching all `conds`.
    pub async fn get_meal_ingredients(&self, conds: Vec<Condition>) -> Result<Vec<MealIngredient>> {
        self.with_storage(move |storage| storage.get_meal_ingredients(&conds))
            .await
    }

    /// Deletes link rows matching all `conds`.
    pub async fn delete_meal_ingredient(&self, conds: Vec<Condition>) -> Result<()> {
        self.with_storage(move |storage| storage.delete_meal_ingredient(&conds))
            .await
    }
}
