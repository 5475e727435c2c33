//! Command-line argument definitions using clap's derive API.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Main command-line interface for the larder nutrition tracker
///
/// Larder stores ingredients, meals, and the links between them in a
/// local SQLite database. Commands read and print the same JSON
/// representations the HTTP layer speaks, so output can be piped
/// straight into other tooling.
#[derive(Parser)]
#[command(version, about, name = "larder")]
pub struct CliArgs {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/larder/larder.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the larder CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the database schema
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Manage ingredients
    #[command(alias = "i")]
    Ingredient {
        #[command(subcommand)]
        command: IngredientCommands,
    },
    /// Manage meals
    #[command(alias = "m")]
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },
}

#[derive(Subcommand)]
pub enum DbCommands {
    /// Drop and recreate the schema
    Create,
    /// Empty all tables, keeping the schema
    Clear,
    /// Drop all tables
    Drop,
}

#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Add a new ingredient
    Add(IngredientAddArgs),
    /// List ingredients, optionally filtered
    #[command(alias = "ls")]
    List(IngredientListArgs),
    /// Show one ingredient by id
    Show { id: i64 },
    /// Delete an ingredient by id
    Delete { id: i64 },
    /// Update fields of a persisted ingredient
    Update(IngredientUpdateArgs),
}

#[derive(Args)]
pub struct IngredientAddArgs {
    /// Ingredient name
    pub name: String,

    #[arg(long, default_value_t = 0.0)]
    pub calories: f64,

    #[arg(long, default_value_t = 0.0)]
    pub fats: f64,

    #[arg(long, default_value_t = 0.0)]
    pub sugar: f64,

    #[arg(long, default_value_t = 0.0)]
    pub veg_protein: f64,

    #[arg(long, default_value_t = 0.0)]
    pub protein: f64,

    #[arg(long, default_value_t = 0.0)]
    pub carbo: f64,
}

#[derive(Args)]
pub struct IngredientListArgs {
    /// Keep only names matching this LIKE pattern (e.g. %egg%)
    #[arg(long)]
    pub name_like: Option<String>,

    /// Keep only ingredients with more calories than this
    #[arg(long)]
    pub min_calories: Option<f64>,

    /// Keep only ingredients with fewer calories than this
    #[arg(long)]
    pub max_calories: Option<f64>,
}

#[derive(Args)]
pub struct IngredientUpdateArgs {
    /// Id of the ingredient to update
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub calories: Option<f64>,

    #[arg(long)]
    pub fats: Option<f64>,

    #[arg(long)]
    pub sugar: Option<f64>,

    #[arg(long)]
    pub veg_protein: Option<f64>,

    #[arg(long)]
    pub protein: Option<f64>,

    #[arg(long)]
    pub carbo: Option<f64>,
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// Add a meal, either from flags or from a full JSON document
    Add(MealAddArgs),
    /// List meals, optionally filtered
    #[command(alias = "ls")]
    List(MealListArgs),
    /// Show one meal by id
    Show { id: i64 },
    /// Delete a meal by id (its ingredient links are kept)
    Delete { id: i64 },
    /// List the ingredient links of a meal
    Ingredients { meal_id: i64 },
}

#[derive(Args)]
pub struct MealAddArgs {
    /// Meal name
    #[arg(long)]
    pub name: Option<String>,

    /// Meal date as YYYY-MM-DD HH:MM; defaults to now
    #[arg(long)]
    pub date: Option<String>,

    /// Full wire-format JSON document, including nested meal_ingredients
    #[arg(long, conflicts_with_all = ["name", "date"])]
    pub json: Option<String>,
}

#[derive(Args)]
pub struct MealListArgs {
    /// Keep only names matching this LIKE pattern
    #[arg(long)]
    pub name_like: Option<String>,

    /// Keep only meals after this date (YYYY-MM-DD HH:MM)
    #[arg(long)]
    pub after: Option<String>,

    /// Keep only meals before this date (YYYY-MM-DD HH:MM)
    #[arg(long)]
    pub before: Option<String>,
}
