//! Ingredient operations for the async façade.

use crate::conditions::Condition;
use crate::error::Result;
use crate::models::Ingredient;

impl super::Larder {
    /// Inserts the ingredient and returns it with `id` assigned.
    pub async fn add_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient> {
        self.with_storage(move |storage| storage.add_ingredient(ingredient))
            .await
    }

    /// Inserts every ingredient that has no `id` yet and returns the full
    /// set.
    pub async fn add_ingredients(&self, ingredients: Vec<Ingredient>) -> Result<Vec<Ingredient>> {
        self.with_storage(move |storage| storage.add_ingredients(ingredients))
            .await
    }

    /// Retrieves ingredients matching all `conds`.
    pub async fn get_ingredients(&self, conds: Vec<Condition>) -> Result<Vec<Ingredient>> {
        self.with_storage(move |storage| storage.get_ingredients(&conds))
            .await
    }

    /// Retrieves a single ingredient by id.
    pub async fn get_ingredient(&self, id: i64) -> Result<Option<Ingredient>> {
        self.with_storage(move |storage| storage.get_ingredient(id))
            .await
    }

    /// Deletes ingredients matching all `conds`.
    pub async fn delete_ingredient(&self, conds: Vec<Condition>) -> Result<()> {
        self.with_storage(move |storage| storage.delete_ingredient(&conds))
            .await
    }

    /// Rewrites all non-id fields of a persisted ingredient and returns
    /// it.
    pub async fn update_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient> {
        self.with_storage(move |storage| {
            storage.update_ingredient(&ingredient)?;
            Ok(ingredient)
        })
        .await
    }
}
