// ABOUTME: Household kitchen state with inventory, shopping list, and owned ingredients
// ABOUTME: Feeds the owned ingredient list into the recipe matcher on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Household
//!
//! Local state for one household: what is in the kitchen, what needs buying,
//! and which ingredients the cook has entered for recipe matching.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::constants::household::{DEFAULT_QUANTITY, EXPIRING_SOON_DAYS, LOCAL_MEMBER};
use crate::intelligence::RecipeMatcher;
use crate::models::{InventoryCategory, InventoryItem, MatchResult};

/// Inventory, shopping list, and owned ingredients of one household
#[derive(Debug, Clone, Default)]
pub struct Household {
    inventory: Vec<InventoryItem>,
    needed: Vec<String>,
    ingredients: Vec<String>,
}

impl Household {
    /// Empty household
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Inventory
    // ------------------------------------------------------------------

    /// Add a pantry item, returning its id
    ///
    /// Blank names are ignored. A blank or missing quantity becomes `"1"`.
    pub fn add_item(&mut self, name: &str, quantity: Option<&str>) -> Option<Uuid> {
        self.add_item_in(name, quantity, InventoryCategory::Pantry, None)
    }

    /// Add an item with an explicit category and optional expiry, returning its id
    pub fn add_item_in(
        &mut self,
        name: &str,
        quantity: Option<&str>,
        category: InventoryCategory,
        expires_in_days: Option<u32>,
    ) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let quantity = quantity
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_QUANTITY);

        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            quantity: quantity.to_owned(),
            added_by: LOCAL_MEMBER.to_owned(),
            expires_in_days,
            category,
            added_at: Utc::now(),
        };
        let id = item.id;
        debug!(item.id = %id, item.name = name, %category, "Added inventory item");
        self.inventory.push(item);
        Some(id)
    }

    /// Remove an inventory item, returning it if it existed
    pub fn remove_item(&mut self, id: Uuid) -> Option<InventoryItem> {
        let position = self.inventory.iter().position(|item| item.id == id)?;
        Some(self.inventory.remove(position))
    }

    /// Inventory in insertion order
    #[must_use]
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Items in `category`, or every item for `None`
    #[must_use]
    pub fn filter_by_category(&self, category: Option<InventoryCategory>) -> Vec<&InventoryItem> {
        self.inventory
            .iter()
            .filter(|item| category.is_none_or(|wanted| item.category == wanted))
            .collect()
    }

    /// Items expiring in one or two days
    ///
    /// An expiry of 0 days is treated like no expiry and is not flagged.
    #[must_use]
    pub fn expiring_soon(&self) -> Vec<&InventoryItem> {
        self.inventory
            .iter()
            .filter(|item| {
                item.expires_in_days
                    .is_some_and(|days| (1..=EXPIRING_SOON_DAYS).contains(&days))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Shopping list
    // ------------------------------------------------------------------

    /// Put a name on the shopping list, returning false when blank or already listed
    pub fn add_needed(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.needed.iter().any(|existing| existing == name) {
            return false;
        }
        self.needed.push(name.to_owned());
        true
    }

    /// Take a name off the shopping list
    pub fn remove_needed(&mut self, name: &str) -> bool {
        let before = self.needed.len();
        self.needed.retain(|existing| existing != name);
        self.needed.len() != before
    }

    /// Move a shopping list entry into the inventory as one pantry item
    pub fn mark_bought(&mut self, name: &str) -> Option<Uuid> {
        if !self.remove_needed(name) {
            return None;
        }
        self.add_item(name, None)
    }

    /// Shopping list in insertion order
    #[must_use]
    pub fn needed(&self) -> &[String] {
        &self.needed
    }

    // ------------------------------------------------------------------
    // Owned ingredients
    // ------------------------------------------------------------------

    /// Record an owned ingredient; blank names are ignored, repeats are kept
    pub fn add_ingredient(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.ingredients.push(name.to_owned());
        true
    }

    /// Remove the owned ingredient at `index`
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        (index < self.ingredients.len()).then(|| self.ingredients.remove(index))
    }

    /// Owned ingredients in entry order
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Ranked recipe matches for the current ingredients
    #[must_use]
    pub fn matches(&self, matcher: &RecipeMatcher) -> Vec<MatchResult> {
        matcher.match_recipes(&self.ingredients)
    }
}
