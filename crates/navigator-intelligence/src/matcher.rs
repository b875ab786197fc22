// ABOUTME: Ingredient-to-recipe matcher scoring a catalog by ingredient overlap
// ABOUTME: Produces ranked match results with missing ingredients and cook-now flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Matcher
//!
//! Scores every catalog recipe against the ingredients a household has on hand.
//!
//! Matching compares names after [`normalize_ingredient`], which lower-cases and
//! does nothing else: no trimming, no plural folding, no synonyms. Both the
//! catalog side and the owned side go through the same function so callers never
//! need their own normalization.
//!
//! Recipes with no overlap are dropped. The rest are ordered by match percent,
//! highest first, with catalog order kept among equal scores.

use std::collections::HashSet;

use navigator_core::models::{MatchResult, Recipe};
use tracing::debug;

use crate::catalog::RecipeCatalog;

/// Normalize an ingredient name for matching
#[must_use]
pub fn normalize_ingredient(name: &str) -> String {
    name.to_lowercase()
}

/// Percentage of `required` ingredients matched, rounded half up
///
/// A recipe with no required ingredients scores 0.
#[must_use]
pub const fn match_percent(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    let rounded = (matched * 200 + required) / (required * 2);
    if rounded > 100 {
        100
    } else {
        rounded as u8
    }
}

/// Score one recipe against an already-normalized owned set
#[must_use]
pub fn score_recipe(recipe: &Recipe, owned: &HashSet<String>) -> MatchResult {
    let required: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|name| normalize_ingredient(name))
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) =
        required.into_iter().partition(|name| owned.contains(name));

    let mut percent = match_percent(matched.len(), matched.len() + missing.len());
    // Very long recipes can round up to 100 with something still missing
    if percent == 100 && !missing.is_empty() {
        percent = 99;
    }

    MatchResult {
        recipe: recipe.clone(),
        match_percent: percent,
        can_cook_now: missing.is_empty() && percent == 100,
        missing,
    }
}

/// Score and rank `recipes` against the `owned` ingredient names
///
/// Total over its inputs: empty catalogs, empty owned lists and recipes without
/// ingredients all yield well-defined (possibly empty) output.
#[must_use]
pub fn match_recipes<S: AsRef<str>>(recipes: &[Recipe], owned: &[S]) -> Vec<MatchResult> {
    let owned: HashSet<String> = owned
        .iter()
        .map(|name| normalize_ingredient(name.as_ref()))
        .collect();

    let mut results: Vec<MatchResult> = recipes
        .iter()
        .map(|recipe| score_recipe(recipe, &owned))
        .filter(|result| result.match_percent > 0)
        .collect();

    // sort_by is stable, so ties keep catalog order
    results.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));

    debug!(
        catalog_size = recipes.len(),
        owned_count = owned.len(),
        matches = results.len(),
        "Matched recipes against owned ingredients"
    );

    results
}

/// Matcher bound to one immutable catalog
#[derive(Debug, Clone)]
pub struct RecipeMatcher {
    catalog: RecipeCatalog,
}

impl RecipeMatcher {
    /// Create a matcher over `catalog`
    #[must_use]
    pub const fn new(catalog: RecipeCatalog) -> Self {
        Self { catalog }
    }

    /// Matcher over the built-in household recipes
    #[must_use]
    pub fn stock() -> Self {
        Self::new(RecipeCatalog::stock())
    }

    /// The catalog being matched against
    #[must_use]
    pub const fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Rank the catalog against `owned`, see [`match_recipes`]
    #[must_use]
    pub fn match_recipes<S: AsRef<str>>(&self, owned: &[S]) -> Vec<MatchResult> {
        match_recipes(self.catalog.recipes(), owned)
    }
}

impl Default for RecipeMatcher {
    fn default() -> Self {
        Self::stock()
    }
}
