// ABOUTME: Recipe matching and nutrition analysis engine for Nutrient Navigator
// ABOUTME: Pure computation split from the main crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Navigator Intelligence
//!
//! Side-effect free algorithms used by the Nutrient Navigator clients and CLI.
//!
//! - **matcher**: ranks catalog recipes by overlap with owned ingredients
//! - **catalog**: the built-in recipe catalog and validated file loading
//! - **nutrients**: calories and annotated nutrients from USDA data
//! - **images**: keyword scoring over photo search results
//! - **browse**: recipe cards, search filters, and favorites

/// Recipe browsing, filtering, and favorites
pub mod browse;
/// Recipe catalog loading and validation
pub mod catalog;
/// Photo search result scoring
pub mod images;
/// Ingredient-to-recipe matcher
pub mod matcher;
/// Nutrient profile extraction
pub mod nutrients;

pub use browse::{filter_recipes, recipe_card, recipe_cards, FavoriteSet};
pub use catalog::{CatalogError, RecipeCatalog};
pub use matcher::{match_recipes, normalize_ingredient, RecipeMatcher};
pub use nutrients::nutrient_profile;
