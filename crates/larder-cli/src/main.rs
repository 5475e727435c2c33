//! Larder CLI Application
//!
//! Command-line interface for the larder nutrition tracker.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{CliArgs, Commands};
use clap::Parser;
use cli::Cli;
use larder_core::LarderBuilder;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let CliArgs {
        database_file,
        command,
    } = CliArgs::parse();

    let larder = LarderBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open larder database")?;

    info!("Larder started");

    let cli = Cli::new(larder);
    match command {
        Commands::Db { command } => cli.handle_db_command(command).await,
        Commands::Ingredient { command } => cli.handle_ingredient_command(command).await,
        Commands::Meal { command } => cli.handle_meal_command(command).await,
    }
}
