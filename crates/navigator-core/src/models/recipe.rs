// ABOUTME: Recipe catalog entries, scored match results, and browsable recipe cards
// ABOUTME: Recipe, MatchResult, RecipeCard, and MealCategory definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A recipe from the matching catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, numeric ids in catalog files are read as strings
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name
    pub title: String,
    /// Required ingredients in catalog order
    pub ingredients: Vec<String>,
    /// Meal slot label (e.g. "Lunch/Dinner")
    pub meal: String,
    /// Link to the full instructions
    pub link: String,
}

impl Recipe {
    /// Build a recipe from borrowed parts
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        ingredients: &[&str],
        meal: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            meal: meal.into(),
            link: link.into(),
        }
    }
}

/// A catalog recipe scored against a set of owned ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The scored recipe, unchanged
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Share of required ingredients on hand, 0 to 100
    pub match_percent: u8,
    /// Lower-cased required ingredients not on hand, in catalog order
    pub missing: Vec<String>,
    /// True when nothing is missing
    pub can_cook_now: bool,
}

/// Meal category used to group browsable recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack
    Snack,
}

impl MealCategory {
    /// All categories, in the order tags are checked
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lower-case tag that selects this category
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse a category name case-insensitively
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.tag() == lower)
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        };
        f.write_str(label)
    }
}

/// A backend food presented as a browsable recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    /// Backend food id
    pub id: i64,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Main nutrition followed by tags
    pub nutrients: Vec<String>,
    /// Meal category derived from tags
    pub category: MealCategory,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_numeric_id_deserializes_as_string() {
        let json = r##"{"id":7,"title":"Toast","ingredients":["Bread"],"meal":"Breakfast","link":"#"}"##;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "7");
    }

    #[test]
    fn test_match_result_serializes_camel_case_flattened() {
        let result = MatchResult {
            recipe: Recipe::new("1", "Toast", &["Bread"], "Breakfast", "#"),
            match_percent: 100,
            missing: Vec::new(),
            can_cook_now: true,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["title"], "Toast");
        assert_eq!(value["matchPercent"], 100);
        assert_eq!(value["canCookNow"], true);
    }

    #[test]
    fn test_meal_category_parse() {
        assert_eq!(MealCategory::parse(" Lunch "), Some(MealCategory::Lunch));
        assert_eq!(MealCategory::parse("brunch"), None);
        assert_eq!(MealCategory::Snack.to_string(), "Snack");
    }
}
