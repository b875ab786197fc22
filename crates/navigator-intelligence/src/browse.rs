// ABOUTME: Recipe browsing over backend foods with search, category filters, and favorites
// ABOUTME: Turns foods into recipe cards and keeps an ordered favorites set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use navigator_core::constants::browse::DEFAULT_DESCRIPTION;
use navigator_core::models::{Food, MealCategory, RecipeCard};
use serde::{Deserialize, Serialize};

use crate::images::fallback_image_url;

/// Category for a tag list: first of breakfast, lunch, dinner, snack present, else dinner
///
/// Tags are compared exactly, so `"Lunch"` does not select [`MealCategory::Lunch`].
#[must_use]
pub fn category_from_tags(tags: &[String]) -> MealCategory {
    MealCategory::ALL
        .into_iter()
        .find(|category| tags.iter().any(|tag| tag == category.tag()))
        .unwrap_or(MealCategory::Dinner)
}

/// Present the backend food at `index` as a browsable recipe
#[must_use]
pub fn recipe_card(food: &Food, index: usize) -> RecipeCard {
    let joined = food.recommendations.join(". ");
    let description = if joined.is_empty() {
        DEFAULT_DESCRIPTION.to_owned()
    } else {
        joined
    };

    let nutrients = food
        .main_nutrition
        .iter()
        .chain(food.tags.iter())
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();

    RecipeCard {
        id: food.id,
        title: food.name.clone(),
        description,
        image: fallback_image_url(index),
        nutrients,
        category: category_from_tags(&food.tags),
    }
}

/// Present every food, indexing fallback images by position
#[must_use]
pub fn recipe_cards(foods: &[Food]) -> Vec<RecipeCard> {
    foods
        .iter()
        .enumerate()
        .map(|(index, food)| recipe_card(food, index))
        .collect()
}

/// Whether `card` matches a search query, case-insensitively, by title or nutrient
#[must_use]
pub fn matches_query(card: &RecipeCard, query: &str) -> bool {
    let query = query.to_lowercase();
    card.title.to_lowercase().contains(&query)
        || card
            .nutrients
            .iter()
            .any(|nutrient| nutrient.to_lowercase().contains(&query))
}

/// Cards matching `query` and, when given, `category`
#[must_use]
pub fn filter_recipes<'a>(
    cards: &'a [RecipeCard],
    query: &str,
    category: Option<MealCategory>,
) -> Vec<&'a RecipeCard> {
    cards
        .iter()
        .filter(|card| category.is_none_or(|wanted| card.category == wanted))
        .filter(|card| matches_query(card, query))
        .collect()
}

/// Ordered set of favorite recipe ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<i64>,
}

impl FavoriteSet {
    /// Build from ids, dropping repeats
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Whether `id` is a favorite
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Add or remove `id`, returning true if it is now a favorite
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(position) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Favorite ids in the order they were added
    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Cards whose id is a favorite, in card order
    #[must_use]
    pub fn select<'a>(&self, cards: &'a [RecipeCard]) -> Vec<&'a RecipeCard> {
        cards.iter().filter(|card| self.contains(card.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: i64, name: &str, main: Option<&str>, recommendations: &[&str], tags: &[&str]) -> Food {
        Food {
            id,
            name: name.to_owned(),
            main_nutrition: main.map(str::to_owned),
            ingredients: Vec::new(),
            recipes: Vec::new(),
            recommendations: recommendations.iter().map(|s| (*s).to_owned()).collect(),
            tags: tags.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn test_recipe_card_from_food() {
        let oatmeal = food(
            7,
            "Oatmeal",
            Some("High Fiber"),
            &["Eat warm", "Add berries"],
            &["snack", "breakfast", ""],
        );
        let card = recipe_card(&oatmeal, 3);
        assert_eq!(card.description, "Eat warm. Add berries");
        assert_eq!(card.nutrients, vec!["High Fiber", "snack", "breakfast"]);
        assert_eq!(card.category, MealCategory::Breakfast);
        assert!(card.image.contains("photo-1467003909588"));
    }

    #[test]
    fn test_recipe_card_defaults() {
        let plain = food(1, "Rice", None, &[], &["Lunch"]);
        let card = recipe_card(&plain, 0);
        assert_eq!(card.description, DEFAULT_DESCRIPTION);
        assert_eq!(card.category, MealCategory::Dinner);
        assert_eq!(card.nutrients, vec!["Lunch"]);

        let blank = food(2, "Broth", None, &[""], &[]);
        assert_eq!(recipe_card(&blank, 1).description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_filter_by_query_and_category() {
        let cards = recipe_cards(&[
            food(1, "Salmon Bowl", Some("Omega-3"), &[], &["dinner"]),
            food(2, "Berry Smoothie", Some("Vitamin C"), &[], &["breakfast"]),
            food(3, "Chickpea Salad", Some("Protein"), &[], &["lunch"]),
        ]);

        let by_nutrient: Vec<i64> = filter_recipes(&cards, "vitamin", None)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(by_nutrient, vec![2]);

        let lunch: Vec<i64> = filter_recipes(&cards, "", Some(MealCategory::Lunch))
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(lunch, vec![3]);

        assert_eq!(filter_recipes(&cards, "", None).len(), 3);
        assert!(filter_recipes(&cards, "salmon", Some(MealCategory::Snack)).is_empty());
    }

    #[test]
    fn test_favorite_toggle_and_select() {
        let cards = recipe_cards(&[
            food(1, "A", None, &[], &[]),
            food(2, "B", None, &[], &[]),
        ]);
        let mut favorites = FavoriteSet::from_ids([2, 2]);
        assert_eq!(favorites.len(), 1);
        assert!(favorites.toggle(1));
        assert!(!favorites.toggle(2));
        assert_eq!(favorites.ids(), &[1]);
        assert_eq!(favorites.select(&cards)[0].title, "A");
    }
}
