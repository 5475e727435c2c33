//! Command handlers bridging CLI arguments to larder-core operations.

use anyhow::{bail, Context, Result};
use larder_core::{
    conditions::{eq, gt, like, lt},
    models::{datetime, Ingredient, Meal, Record},
    Larder,
};
use log::info;

use crate::args::{
    DbCommands, IngredientCommands, IngredientListArgs, IngredientUpdateArgs, MealCommands,
    MealListArgs,
};

pub struct Cli {
    larder: Larder,
}

impl Cli {
    pub fn new(larder: Larder) -> Self {
        Self { larder }
    }

    pub async fn handle_db_command(&self, command: DbCommands) -> Result<()> {
        match command {
            DbCommands::Create => {
                self.larder.drop_schema().await?;
                self.larder
                    .init()
                    .await
                    .context("Failed to create schema")?;
                info!("Schema recreated");
                println!("Database schema created");
            }
            DbCommands::Clear => {
                self.larder.clear().await.context("Failed to clear tables")?;
                println!("All tables emptied");
            }
            DbCommands::Drop => {
                self.larder.drop_schema().await?;
                println!("Database schema dropped");
            }
        }
        Ok(())
    }

    pub async fn handle_ingredient_command(&self, command: IngredientCommands) -> Result<()> {
        match command {
            IngredientCommands::Add(args) => {
                let ingredient = Ingredient {
                    id: None,
                    name: args.name,
                    calories: args.calories,
                    fats: args.fats,
                    sugar: args.sugar,
                    veg_protein: args.veg_protein,
                    protein: args.protein,
                    carbo: args.carbo,
                };
                let added = self.larder.add_ingredient(ingredient).await?;
                info!("Added ingredient {:?}", added.id);
                print_record(&added)
            }
            IngredientCommands::List(args) => {
                let conds = ingredient_conditions(args);
                print_records(&self.larder.get_ingredients(conds).await?)
            }
            IngredientCommands::Show { id } => match self.larder.get_ingredient(id).await? {
                Some(ingredient) => print_record(&ingredient),
                None => bail!("Ingredient {id} not found"),
            },
            IngredientCommands::Delete { id } => {
                self.larder.delete_ingredient(vec![eq("id", id)]).await?;
                info!("Deleted ingredient {id}");
                println!("Deleted ingredients matching id {id}");
                Ok(())
            }
            IngredientCommands::Update(args) => self.update_ingredient(args).await,
        }
    }

    async fn update_ingredient(&self, args: IngredientUpdateArgs) -> Result<()> {
        let Some(mut ingredient) = self.larder.get_ingredient(args.id).await? else {
            bail!("Ingredient {} not found", args.id);
        };

        if let Some(name) = args.name {
            ingredient.name = name;
        }
        if let Some(calories) = args.calories {
            ingredient.calories = calories;
        }
        if let Some(fats) = args.fats {
            ingredient.fats = fats;
        }
        if let Some(sugar) = args.sugar {
            ingredient.sugar = sugar;
        }
        if let Some(veg_protein) = args.veg_protein {
            ingredient.veg_protein = veg_protein;
        }
        if let Some(protein) = args.protein {
            ingredient.protein = protein;
        }
        if let Some(carbo) = args.carbo {
            ingredient.carbo = carbo;
        }

        let updated = self.larder.update_ingredient(ingredient).await?;
        info!("Updated ingredient {:?}", updated.id);
        print_record(&updated)
    }

    pub async fn handle_meal_command(&self, command: MealCommands) -> Result<()> {
        match command {
            MealCommands::Add(args) => {
                let meal = match args.json {
                    Some(json) => Meal::load(&json).context("Malformed meal JSON")?,
                    None => Meal {
                        name: args.name,
                        date: match args.date {
                            Some(text) => datetime::parse(&text)?,
                            None => datetime::now_minute(),
                        },
                        ..Default::default()
                    },
                };
                let added = self.larder.add_meal(meal).await?;
                info!("Added meal {:?}", added.id);
                print_record(&added)
            }
            MealCommands::List(args) => {
                let conds = meal_conditions(args)?;
                print_records(&self.larder.get_meals(conds).await?)
            }
            MealCommands::Show { id } => match self.larder.get_meal(id).await? {
                Some(meal) => print_record(&meal),
                None => bail!("Meal {id} not found"),
            },
            MealCommands::Delete { id } => {
                self.larder.delete_meal(vec![eq("id", id)]).await?;
                info!("Deleted meal {id}");
                println!("Deleted meals matching id {id}");
                Ok(())
            }
            MealCommands::Ingredients { meal_id } => {
                let mut links = self
                    .larder
                    .get_meal_ingredients(vec![eq("meal_id", meal_id)])
                    .await?;
                // present links the way the HTTP layer does: with the full
                // ingredient attached
                for link in &mut links {
                    if let Some(id) = link.ingredient_id {
                        link.ingredient = self.larder.get_ingredient(id).await?;
                    }
                }
                print_records(&links)
            }
        }
    }
}

fn ingredient_conditions(args: IngredientListArgs) -> Vec<larder_core::Condition> {
    let mut conds = Vec::new();
    if let Some(pattern) = args.name_like {
        conds.push(like("name", pattern));
    }
    if let Some(min) = args.min_calories {
        conds.push(gt("calories", min));
    }
    if let Some(max) = args.max_calories {
        conds.push(lt("calories", max));
    }
    conds
}

fn meal_conditions(args: MealListArgs) -> Result<Vec<larder_core::Condition>> {
    let mut conds = Vec::new();
    if let Some(pattern) = args.name_like {
        conds.push(like("name", pattern));
    }
    // normalize through the wire format so comparisons stay textual but
    // chronological
    if let Some(after) = args.after {
        conds.push(gt("date", datetime::format(&datetime::parse(&after)?)));
    }
    if let Some(before) = args.before {
        conds.push(lt("date", datetime::format(&datetime::parse(&before)?)));
    }
    Ok(conds)
}

fn print_record<T: Record>(record: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

fn print_records<T: Record>(records: &[T]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
