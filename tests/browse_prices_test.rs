// ABOUTME: Integration tests for recipe browsing cards and grocery price quotes
// ABOUTME: Covers card building from backend foods, filtering, and mock store prices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrient_navigator::intelligence::{filter_recipes, recipe_card, recipe_cards};
use nutrient_navigator::models::{Food, MealCategory};
use nutrient_navigator::prices::PriceLookup;
use serde_json::json;

use common::sample_food;

fn menu() -> Vec<Food> {
    vec![
        sample_food(1, "Overnight Oats", "High Fiber", &["breakfast", "snack"]),
        sample_food(2, "Chicken Wrap", "High Protein", &["lunch"]),
        sample_food(3, "Salmon Teriyaki", "Omega-3", &[]),
        sample_food(4, "Trail Mix", "Healthy Fats", &["Snack"]),
    ]
}

#[test]
fn test_cards_from_backend_json() {
    let food: Food = serde_json::from_value(json!({
        "id": 12,
        "name": "Quinoa Salad",
        "mainNutrition": "Complete Protein",
        "recommendations": ["Serve chilled", "Add lemon"],
        "tags": ["lunch", "vegan"]
    }))
    .unwrap();

    let card = recipe_card(&food, 0);
    assert_eq!(card.title, "Quinoa Salad");
    assert_eq!(card.description, "Serve chilled. Add lemon");
    assert_eq!(card.nutrients, vec!["Complete Protein", "lunch", "vegan"]);
    assert_eq!(card.category, MealCategory::Lunch);
    assert_eq!(
        card.image,
        "https://images.unsplash.com/photo-1467003909585?w=400&h=300&fit=crop"
    );

    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["category"], "Lunch");
}

#[test]
fn test_category_derivation() {
    let cards = recipe_cards(&menu());
    let categories: Vec<MealCategory> = cards.iter().map(|c| c.category).collect();
    assert_eq!(
        categories,
        vec![
            MealCategory::Breakfast,
            MealCategory::Lunch,
            MealCategory::Dinner,
            MealCategory::Dinner,
        ]
    );
}

#[test]
fn test_filters_combine() {
    let cards = recipe_cards(&menu());

    let protein: Vec<&str> = filter_recipes(&cards, "PROTEIN", None)
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(protein, vec!["Chicken Wrap"]);

    let dinner: Vec<i64> = filter_recipes(&cards, "", Some(MealCategory::Dinner))
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(dinner, vec![3, 4]);

    assert!(filter_recipes(&cards, "snack", Some(MealCategory::Snack)).is_empty());
    assert_eq!(filter_recipes(&cards, "snack", None).len(), 2);
}

#[test]
fn test_price_quotes() {
    let bread = PriceLookup::mock_prices("Whole wheat bread");
    assert_eq!(bread.len(), 2);
    assert_eq!(bread[0].store, "Walmart");
    assert!((bread[0].price - 2.49).abs() < f64::EPSILON);
    assert_eq!(bread[0].unit, "loaf");

    let eggs = PriceLookup::mock_prices("free range EGGS");
    assert_eq!(eggs[1].unit, "18 pack");
    assert_eq!(eggs[1].distance, "5.0 km");

    let value = serde_json::to_value(&PriceLookup::mock_prices("milk")[0]).unwrap();
    assert_eq!(value["productUrl"], "#");
    assert_eq!(value["logo"], "🏪");
}
