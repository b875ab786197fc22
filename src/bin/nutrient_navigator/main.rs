// ABOUTME: Nutrient Navigator CLI for recipe matching, nutrient lookups, and price checks
// ABOUTME: Loads environment configuration, sets up logging, and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Rank the built-in recipes against what is in the kitchen
//! nutrient-navigator match eggs rice "soy sauce"
//!
//! # Same, against a custom catalog, as JSON
//! nutrient-navigator --catalog recipes.yaml --format json match chicken onion
//!
//! # Calories and nutrients for a food (needs USDA_API_KEY, or --mock)
//! nutrient-navigator nutrients "chicken breast"
//!
//! # Store prices for an item
//! nutrient-navigator prices milk
//!
//! # Browse backend foods as recipe cards
//! nutrient-navigator foods --query protein --category lunch
//!
//! # Photo URLs for recipe names (needs UNSPLASH_ACCESS_KEY)
//! nutrient-navigator image "Egg Fried Rice" "Burger Bowls"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrient_navigator::config::NavigatorConfig;
use nutrient_navigator::external::http_client::initialize_shared_client;
use nutrient_navigator::logging::LoggingConfig;
use tracing::info;

use helpers::display::OutputFormat;

#[derive(Parser)]
#[command(
    name = "nutrient-navigator",
    about = "Nutrient Navigator kitchen assistant",
    long_about = "Match recipes to the ingredients you have, look up nutrients, and compare grocery prices."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Recipe catalog file (YAML or JSON) replacing the built-in recipes
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank catalog recipes by the ingredients on hand
    Match {
        /// Ingredients you have
        ingredients: Vec<String>,
    },

    /// List the recipe catalog
    Catalog,

    /// Calories and nutrients for a food
    Nutrients {
        /// Food name to search for
        food: String,

        /// Use built-in sample data instead of the USDA API
        #[arg(long)]
        mock: bool,
    },

    /// Store prices for a grocery item
    Prices {
        /// Item to price
        item: String,
    },

    /// Browse backend foods as recipe cards
    Foods {
        /// Ask the backend to search by name
        #[arg(long)]
        search: Option<String>,

        /// Filter cards by title or nutrient
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Meal category (breakfast, lunch, dinner, snack)
        #[arg(long)]
        category: Option<String>,
    },

    /// Check that the backend is reachable
    Health,

    /// Photo URLs for recipe names
    Image {
        /// Recipe names
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let config = NavigatorConfig::from_env()?;
    info!("{}", config.summary());
    initialize_shared_client(&config.http);

    let format = cli.format;
    match cli.command {
        Command::Match { ingredients } => {
            commands::recipes::match_ingredients(&config, cli.catalog, &ingredients, format)?;
        }
        Command::Catalog => {
            commands::recipes::list_catalog(&config, cli.catalog, format)?;
        }
        Command::Nutrients { food, mock } => {
            commands::lookup::nutrients(&config, &food, mock, format).await?;
        }
        Command::Prices { item } => {
            commands::lookup::prices(&item, format)?;
        }
        Command::Foods {
            search,
            query,
            category,
        } => {
            commands::backend::foods(&config, search.as_deref(), &query, category.as_deref(), format)
                .await?;
        }
        Command::Health => {
            commands::backend::health(&config).await?;
        }
        Command::Image { names } => {
            commands::lookup::images(&config, &names, format).await?;
        }
    }

    Ok(())
}
