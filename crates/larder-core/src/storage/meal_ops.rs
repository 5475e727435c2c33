//! Meal and meal/ingredient link operations, including cascade inserts.

use crate::conditions::{eq, Condition};
use crate::error::Result;
use crate::models::{Meal, MealIngredient};

impl super::MealStorage {
    /// Inserts the meal row, then each nested meal ingredient in list
    /// order with `meal_id` pointing at the new row.
    ///
    /// Each insert commits on its own; a failure partway leaves the meal
    /// persisted without the remaining children.
    pub fn add_meal(&self, mut meal: Meal) -> Result<Meal> {
        let fields = meal.insert_row();
        let children = std::mem::take(&mut meal.meal_ingredients);
        let mut meal = self.insert_record(meal, fields)?;

        let mut saved = Vec::with_capacity(children.len());
        for mut child in children {
            child.meal_id = meal.id;
            saved.push(self.add_meal_ingredient(child)?);
        }
        meal.meal_ingredients = saved;

        Ok(meal)
    }

    /// Retrieves meals matching all `conds`. The nested collection stays
    /// empty on reads; links live in their own table.
    pub fn get_meals(&self, conds: &[Condition]) -> Result<Vec<Meal>> {
        self.select_records(conds)
    }

    /// Retrieves a single meal by id.
    pub fn get_meal(&self, id: i64) -> Result<Option<Meal>> {
        Ok(self.get_meals(&[eq("id", id)])?.into_iter().next())
    }

    /// Deletes meals matching all `conds`; referencing link rows are
    /// kept.
    pub fn delete_meal(&self, conds: &[Condition]) -> Result<()> {
        self.delete_records::<Meal>(conds)
    }

    /// Inserts the link row. An unsaved nested ingredient is inserted
    /// first and its new id becomes `ingredient_id`.
    pub fn add_meal_ingredient(&self, mut meal_ingredient: MealIngredient) -> Result<MealIngredient> {
        if let Some(ingredient) = meal_ingredient.ingredient.take() {
            let ingredient = if ingredient.id.is_none() {
                self.add_ingredient(ingredient)?
            } else {
                ingredient
            };
            meal_ingredient.ingredient_id = ingredient.id;
            meal_ingredient.ingredient = Some(ingredient);
        }

        let fields = meal_ingredient.insert_row();
        self.insert_record(meal_ingredient, fields)
    }

    /// Retrieves link rows matching all `conds`.
    pub fn get_meal_ingredients(&self, conds: &[Condition]) -> Result<Vec<MealIngredient>> {
        self.select_records(conds)
    }

    /// Deletes link rows matching all `conds`.
    pub fn delete_meal_ingredient(&self, conds: &[Condition]) -> Result<()> {
        self.delete_records::<MealIngredient>(conds)
    }
}
