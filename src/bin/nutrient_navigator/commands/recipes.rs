// ABOUTME: Recipe matching and catalog listing commands
// ABOUTME: Resolves the catalog from the command line, the environment, or the built-in set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use nutrient_navigator::config::NavigatorConfig;
use nutrient_navigator::intelligence::{RecipeCatalog, RecipeMatcher};
use nutrient_navigator::household::Household;
use tracing::info;

use crate::helpers::display::{print_catalog, print_matches, OutputFormat};

/// Catalog from `--catalog`, then `NAVIGATOR_CATALOG_PATH`, then the built-in recipes
fn load_catalog(config: &NavigatorConfig, override_path: Option<PathBuf>) -> Result<RecipeCatalog> {
    match override_path.or_else(|| config.catalog_path.clone()) {
        Some(path) => Ok(RecipeCatalog::load(path)?),
        None => Ok(RecipeCatalog::stock()),
    }
}

/// Rank recipes against the given ingredients
pub fn match_ingredients(
    config: &NavigatorConfig,
    catalog_path: Option<PathBuf>,
    ingredients: &[String],
    format: OutputFormat,
) -> Result<()> {
    let matcher = RecipeMatcher::new(load_catalog(config, catalog_path)?);

    let mut household = Household::new();
    for ingredient in ingredients {
        household.add_ingredient(ingredient);
    }

    let results = household.matches(&matcher);
    info!(
        ingredients = household.ingredients().len(),
        matches = results.len(),
        "Matched recipes"
    );
    print_matches(&results, format)
}

/// Print every catalog recipe
pub fn list_catalog(
    config: &NavigatorConfig,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(config, catalog_path)?;
    print_catalog(&catalog, format)
}
