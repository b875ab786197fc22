// ABOUTME: Main library entry point for the Nutrient Navigator kitchen assistant
// ABOUTME: Wires configuration, logging, external clients, and household state around the matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Nutrient Navigator
//!
//! Recipe matching and nutrition lookups for a shared household kitchen.
//!
//! ## Features
//!
//! - **Recipe matching**: rank a catalog by how many required ingredients are on hand
//! - **Nutrient lookup**: calories and annotated nutrients from USDA `FoodData` Central
//! - **Recipe images**: keyword-scored photo search with cached results
//! - **Household**: inventory, shopping list, and favorites synced with the recipe backend
//!
//! ## Architecture
//!
//! - `navigator-core`: errors, models, and constants shared by every crate
//! - `navigator-intelligence`: the matcher and other side-effect free algorithms
//! - this crate: configuration, logging, HTTP clients, and the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrient_navigator::intelligence::RecipeMatcher;
//!
//! let matcher = RecipeMatcher::stock();
//! let results = matcher.match_recipes(&["eggs", "rice", "soy sauce", "green onion"]);
//!
//! assert_eq!(results[0].recipe.title, "Egg Fried Rice");
//! assert!(results[0].can_cook_now);
//! ```

pub use navigator_core::{constants, errors, models};
pub use navigator_intelligence as intelligence;

/// In-memory caching with TTL
pub mod cache;

/// Environment configuration
pub mod config;

/// HTTP clients for the backend, USDA, and photo search
pub mod external;

/// Favorites synced with the backend
pub mod favorites;

/// Household inventory, shopping list, and owned ingredients
pub mod household;

/// Structured logging setup
pub mod logging;

/// Grocery price quotes
pub mod prices;
