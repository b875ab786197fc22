// ABOUTME: Output formatting helpers for the nutrient-navigator CLI
// ABOUTME: Prints matches, catalogs, nutrients, prices, cards, and images as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::ValueEnum;
use nutrient_navigator::intelligence::RecipeCatalog;
use nutrient_navigator::models::{MatchResult, NutrientProfile, PriceQuote, RecipeCard};
use serde::Serialize;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ranked recipe matches
pub fn print_matches(results: &[MatchResult], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(results);
    }

    if results.is_empty() {
        println!("No recipes use any of those ingredients.");
        return Ok(());
    }

    println!("{}", "=".repeat(60));
    for result in results {
        let badge = if result.can_cook_now {
            "  [cook now]"
        } else {
            ""
        };
        println!("{:>3}%  {}{badge}", result.match_percent, result.recipe.title);
        if !result.missing.is_empty() {
            println!("      missing: {}", result.missing.join(", "));
        }
        println!("      {}", result.recipe.link);
    }
    println!("{}", "=".repeat(60));
    Ok(())
}

/// Every catalog recipe
pub fn print_catalog(catalog: &RecipeCatalog, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(catalog.recipes());
    }

    for recipe in catalog {
        println!("[{}] {} ({})", recipe.id, recipe.title, recipe.meal);
        println!("    {}", recipe.ingredients.join(", "));
    }
    println!("\n{} recipes", catalog.len());
    Ok(())
}

/// Calories and nutrients for one food
pub fn print_profile(profile: &NutrientProfile, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(profile);
    }

    println!("{}", profile.food);
    println!("{}", "-".repeat(60));
    println!("Calories: {} kcal", profile.calories);
    for entry in &profile.nutrients {
        println!("  {:<28} {:>10.2} {}", entry.name, entry.value, entry.unit);
        if let Some(description) = &entry.description {
            println!("      {description}");
        }
    }
    Ok(())
}

/// Store quotes for an item
pub fn print_prices(item: &str, quotes: &[PriceQuote], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(quotes);
    }

    println!("Prices for {item}:");
    for quote in quotes {
        println!(
            "  {} {:<10} ${:>6.2} / {:<8} {}",
            quote.logo, quote.store, quote.price, quote.unit, quote.distance
        );
    }
    Ok(())
}

/// Browsable recipe cards
pub fn print_cards(cards: &[RecipeCard], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(cards);
    }

    if cards.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    for card in cards {
        println!("[{}] {} ({})", card.id, card.title, card.category);
        println!("    {}", card.description);
        if !card.nutrients.is_empty() {
            println!("    {}", card.nutrients.join(" | "));
        }
    }
    Ok(())
}

/// Resolved recipe photos
pub fn print_images(images: &[(String, String)], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let map: serde_json::Map<String, serde_json::Value> = images
            .iter()
            .map(|(name, url)| (name.clone(), serde_json::Value::String(url.clone())))
            .collect();
        return print_json(&map);
    }

    for (name, url) in images {
        println!("{name}: {url}");
    }
    Ok(())
}
