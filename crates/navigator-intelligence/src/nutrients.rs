// ABOUTME: Nutrient profile extraction from USDA food search nutrients
// ABOUTME: Pulls calories, derives nutrient keys and short names, and attaches descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use navigator_core::models::{NutrientEntry, NutrientProfile, UsdaNutrient};
use regex::Regex;

/// Keyword table for nutrient descriptions, matched in order
pub const NUTRIENT_KEYWORDS: &[(&str, &str)] = &[
    ("protein", "Essential for building and repairing muscles, skin, and tissues."),
    ("fat", "Provides energy, supports cell growth, and helps absorb vitamins."),
    ("carbohydrate", "Primary energy source for the body and brain."),
    ("fiber", "Improves digestion, helps control blood sugar, and supports gut health."),
    ("calcium", "Critical for strong bones, teeth, and muscle contraction."),
    ("iron", "Helps transport oxygen in the blood and prevents fatigue."),
    ("potassium", "Supports heart function, muscles, and fluid balance."),
    ("sodium", "Regulates fluid balance and nerve function (limit intake)."),
    ("magnesium", "Supports muscle and nerve function and energy production."),
    ("zinc", "Supports immune system and wound healing."),
    ("vitamin a", "Supports vision, immune function, and reproduction."),
    ("vitamin c", "Boosts immune function and supports skin and wound healing."),
    ("vitamin d", "Helps absorb calcium and supports immune health."),
    ("vitamin e", "Acts as an antioxidant and protects cells from damage."),
    ("vitamin k", "Essential for blood clotting and bone health."),
    ("thiamin", "Supports energy metabolism and nerve function."),
    ("riboflavin", "Important for energy production and cellular function."),
    ("niacin", "Supports metabolism and nervous system health."),
    ("folate", "Essential for DNA synthesis and cell growth."),
    ("cholesterol", "A fat needed for hormone production, but limit intake."),
    ("sugar", "Simple carbohydrates that provide quick energy."),
];

const KCAL: &str = "kcal";

static WHITESPACE_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

fn is_kcal(nutrient: &UsdaNutrient) -> bool {
    nutrient.unit_name.to_lowercase() == KCAL
}

/// Energy in kcal from the first energy or calories entry, 0 when absent
#[must_use]
pub fn calories(nutrients: &[UsdaNutrient]) -> f64 {
    nutrients
        .iter()
        .find(|n| {
            let name = n.nutrient_name.to_lowercase();
            (name.contains("energy") || name.contains("calories")) && is_kcal(n)
        })
        .and_then(|n| n.value)
        .unwrap_or(0.0)
}

/// Description for the first keyword contained in the lower-cased name
#[must_use]
pub fn describe(nutrient_name: &str) -> Option<&'static str> {
    let lower = nutrient_name.to_lowercase();
    NUTRIENT_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, description)| *description)
}

/// Lower-cased name with every whitespace run replaced by one underscore
#[must_use]
pub fn nutrient_key(nutrient_name: &str) -> String {
    let lower = nutrient_name.to_lowercase();
    match WHITESPACE_RUN.as_ref() {
        Some(re) => re.replace_all(&lower, "_").into_owned(),
        None => lower,
    }
}

/// Summarize one food's nutrients
///
/// Energy entries reported in kcal are folded into `calories` and left out of
/// the nutrient list. Everything else is kept in source order.
#[must_use]
pub fn nutrient_profile(food: &str, nutrients: &[UsdaNutrient]) -> NutrientProfile {
    let entries = nutrients
        .iter()
        .filter(|n| !(n.nutrient_name.to_lowercase().contains("energy") && is_kcal(n)))
        .map(|n| NutrientEntry {
            key: nutrient_key(&n.nutrient_name),
            name: n
                .nutrient_name
                .split(',')
                .next()
                .unwrap_or_default()
                .to_owned(),
            value: n.value.unwrap_or(0.0),
            unit: n.unit_name.clone(),
            description: describe(&n.nutrient_name).map(str::to_owned),
        })
        .collect();

    NutrientProfile {
        food: food.to_owned(),
        calories: calories(nutrients),
        nutrients: entries,
    }
}
