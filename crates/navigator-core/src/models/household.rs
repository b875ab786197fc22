// ABOUTME: Household inventory, shopping list, and user profile models
// ABOUTME: Local inventory items plus the snake_case records exchanged with the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage category for an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryCategory {
    /// Fruit and vegetables
    Produce,
    /// Milk, cheese, eggs
    Dairy,
    /// Meat and fish
    Meat,
    /// Dry goods and condiments
    Pantry,
    /// Bread and baked goods
    Bakery,
    /// Frozen food
    Frozen,
}

impl InventoryCategory {
    /// Every category, in display order
    pub const ALL: [Self; 6] = [
        Self::Produce,
        Self::Dairy,
        Self::Meat,
        Self::Pantry,
        Self::Bakery,
        Self::Frozen,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Pantry => "Pantry",
            Self::Bakery => "Bakery",
            Self::Frozen => "Frozen",
        }
    }

    /// Parse a label case-insensitively
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for InventoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An item in the local household inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Local identifier
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Free-text quantity (e.g. "2 lbs")
    pub quantity: String,
    /// Member who added the item
    pub added_by: String,
    /// Days until the item expires, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<u32>,
    /// Storage category
    pub category: InventoryCategory,
    /// When the item was added
    pub added_at: DateTime<Utc>,
}

/// Inventory row as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Row id
    pub id: i64,
    /// Owning household
    pub household_id: i64,
    /// Item name
    pub name: String,
    /// Free-text quantity
    #[serde(default)]
    pub quantity: Option<String>,
    /// Category label
    #[serde(default)]
    pub category: Option<String>,
    /// User id of the member who added it
    #[serde(default)]
    pub added_by: Option<String>,
}

/// Shopping list row as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeededRecord {
    /// Row id
    pub id: i64,
    /// Owning household
    pub household_id: i64,
    /// Item name
    pub name: String,
    /// User id of the member who added it
    #[serde(default)]
    pub added_by: Option<String>,
}

/// Body for adding an inventory row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryRecord {
    /// Item name
    pub name: String,
    /// Free-text quantity
    pub quantity: String,
    /// Category label
    pub category: String,
    /// User id of the member adding it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

/// Body for adding a shopping list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNeededRecord {
    /// Item name
    pub name: String,
    /// User id of the member adding it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

/// Household a user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdInfo {
    /// Household id
    pub id: i64,
    /// Household name
    #[serde(default)]
    pub name: Option<String>,
}

/// Profile sent after sign-up so the backend can create the user's household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity provider user id
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// Response to a profile creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Whether the profile was stored
    pub success: bool,
    /// Household created or joined
    pub household_id: i64,
}
