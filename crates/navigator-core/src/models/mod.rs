// ABOUTME: Core data models shared across the Nutrient Navigator workspace
// ABOUTME: Re-exports recipe, food, household, and price structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data carried between the matcher, the external clients and the CLI.
//!
//! ## Core Models
//!
//! - `Recipe`: a catalog recipe with its required ingredients
//! - `MatchResult`: a recipe scored against the owned ingredients
//! - `Food`: a food record served by the backend API
//! - `NutrientProfile`: calories plus annotated nutrients for one food
//! - `InventoryItem`: an item in the shared household inventory
//! - `PriceQuote`: a store price for a grocery item

mod food;
mod household;
mod price;
mod recipe;

// Recipe domain
pub use recipe::{MatchResult, MealCategory, Recipe, RecipeCard};

// Food and nutrition domain
pub use food::{Food, NutrientEntry, NutrientProfile, UsdaNutrient};

// Household domain
pub use household::{
    HouseholdInfo, InventoryCategory, InventoryItem, InventoryRecord, NeededRecord,
    NewInventoryRecord, NewNeededRecord, ProfileResponse, UserProfile,
};

// Prices
pub use price::PriceQuote;
