// ABOUTME: Commands that talk to the recipe backend
// ABOUTME: Lists foods as filtered recipe cards and checks backend health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use nutrient_navigator::config::NavigatorConfig;
use nutrient_navigator::external::BackendClient;
use nutrient_navigator::intelligence::{filter_recipes, recipe_cards};
use nutrient_navigator::models::MealCategory;

use crate::helpers::display::{print_cards, OutputFormat};

/// List backend foods as recipe cards
pub async fn foods(
    config: &NavigatorConfig,
    search: Option<&str>,
    query: &str,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let category = match category {
        None => None,
        Some(value) if value.eq_ignore_ascii_case("all") => None,
        Some(value) => match MealCategory::parse(value) {
            Some(parsed) => Some(parsed),
            None => bail!("Unknown category '{value}' (expected breakfast, lunch, dinner, snack, or all)"),
        },
    };

    let client = BackendClient::from_config(config);
    let foods = match search {
        Some(name) => client.search_foods(name).await?,
        None => client.get_all_foods().await?,
    };

    let cards = recipe_cards(&foods);
    let filtered: Vec<_> = filter_recipes(&cards, query, category)
        .into_iter()
        .cloned()
        .collect();
    print_cards(&filtered, format)
}

/// Print the backend health message
pub async fn health(config: &NavigatorConfig) -> Result<()> {
    let client = BackendClient::from_config(config);
    let message = client.health_check().await?;
    println!("{} is up: {message}", client.base_url());
    Ok(())
}
