// ABOUTME: Food records from the backend and nutrient summaries from USDA data
// ABOUTME: Food, UsdaNutrient, NutrientEntry, and NutrientProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A food served by the backend `/api/foods` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Backend id
    pub id: i64,
    /// Food name
    pub name: String,
    /// Headline nutrition fact (e.g. "High Protein")
    #[serde(default)]
    pub main_nutrition: Option<String>,
    /// Ingredient names
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Recipe names using this food
    #[serde(default)]
    pub recipes: Vec<String>,
    /// Serving recommendations
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Free-form tags, including meal slots
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A nutrient as reported by a USDA food search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaNutrient {
    /// Nutrient name (e.g. "Protein", "Energy")
    #[serde(default)]
    pub nutrient_name: String,
    /// Unit (e.g. "g", "kcal", "mg")
    #[serde(default)]
    pub unit_name: String,
    /// Amount per 100g
    #[serde(default)]
    pub value: Option<f64>,
}

/// One annotated nutrient in a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    /// Lower-cased name with whitespace replaced by underscores
    pub key: String,
    /// Name up to the first comma
    pub name: String,
    /// Amount per 100g
    pub value: f64,
    /// Unit as reported
    pub unit: String,
    /// What the nutrient does, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Calories and annotated nutrients for one food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Food description as reported by USDA
    pub food: String,
    /// Energy in kcal, 0 when not reported
    pub calories: f64,
    /// Every other nutrient, in source order
    pub nutrients: Vec<NutrientEntry>,
}
