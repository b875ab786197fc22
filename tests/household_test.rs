// ABOUTME: Integration tests for household inventory, shopping list, and ingredient matching
// ABOUTME: Exercises the kitchen workflow from adding items to cooking from matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrient_navigator::household::Household;
use nutrient_navigator::intelligence::RecipeMatcher;
use nutrient_navigator::models::InventoryCategory;

#[test]
fn test_inventory_filters_by_category() {
    let mut household = Household::new();
    household.add_item_in("Spinach", Some("1 bag"), InventoryCategory::Produce, Some(3));
    household.add_item_in("Chicken", Some("2 lbs"), InventoryCategory::Meat, Some(1));
    household.add_item("Rice", Some("5 kg"));

    assert_eq!(household.filter_by_category(None).len(), 3);
    let meat = household.filter_by_category(Some(InventoryCategory::Meat));
    assert_eq!(meat.len(), 1);
    assert_eq!(meat[0].name, "Chicken");
    assert!(household
        .filter_by_category(Some(InventoryCategory::Frozen))
        .is_empty());
}

#[test]
fn test_remove_item_by_id() {
    let mut household = Household::new();
    let keep = household.add_item("Flour", None).unwrap();
    let sugar = household.add_item("Sugar", Some("  ")).unwrap();

    assert_eq!(household.inventory()[1].quantity, "1");
    let removed = household.remove_item(sugar).unwrap();
    assert_eq!(removed.name, "Sugar");
    assert!(household.remove_item(sugar).is_none());
    assert_eq!(household.inventory().len(), 1);
    assert_eq!(household.inventory()[0].id, keep);
}

#[test]
fn test_shopping_list_round_trip_to_inventory() {
    let mut household = Household::new();
    assert!(household.add_needed("Milk"));
    assert!(household.add_needed("Bread"));
    assert!(!household.add_needed(" Milk "));
    assert_eq!(household.needed(), &["Milk".to_owned(), "Bread".to_owned()]);

    household.mark_bought("Milk").unwrap();
    assert_eq!(household.needed(), &["Bread".to_owned()]);
    let milk = &household.inventory()[0];
    assert_eq!(milk.category, InventoryCategory::Pantry);
    assert_eq!(milk.quantity, "1");
    assert_eq!(milk.added_by, "You");

    assert!(household.remove_needed("Bread"));
    assert!(!household.remove_needed("Bread"));
}

#[test]
fn test_ingredients_drive_matches() {
    let matcher = RecipeMatcher::stock();
    let mut household = Household::new();
    assert!(household.matches(&matcher).is_empty());

    for name in ["Pasta", "Tomato", "Garlic", "  ", "Olive Oil", "Garlic"] {
        household.add_ingredient(name);
    }
    assert_eq!(household.ingredients().len(), 5);

    let results = household.matches(&matcher);
    assert_eq!(results[0].recipe.title, "Pasta Primavera");
    assert!(results[0].can_cook_now);

    // Pasta is the first ingredient entered
    household.remove_ingredient(0);
    let results = household.matches(&matcher);
    assert_eq!(results[0].recipe.title, "Pasta Primavera");
    assert_eq!(results[0].match_percent, 75);
    assert_eq!(results[0].missing, vec!["pasta"]);
}
