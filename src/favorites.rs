// ABOUTME: Favorite recipes of one user kept in step with the backend
// ABOUTME: Toggles are written through to the backend before the local set changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::external::BackendClient;
use crate::intelligence::FavoriteSet;
use crate::models::RecipeCard;

/// Favorites of one user, backed by the recipe backend
#[derive(Debug, Clone)]
pub struct FavoritesService {
    client: BackendClient,
    user_id: Uuid,
    favorites: FavoriteSet,
}

impl FavoritesService {
    /// Service for `user_id` with no favorites loaded yet
    #[must_use]
    pub fn new(client: BackendClient, user_id: Uuid) -> Self {
        Self {
            client,
            user_id,
            favorites: FavoriteSet::default(),
        }
    }

    /// Replace the local set with the backend's list
    ///
    /// # Errors
    ///
    /// Returns the backend error; the local set is left unchanged
    pub async fn reload(&mut self) -> AppResult<&FavoriteSet> {
        let ids = self.client.favorites(self.user_id).await?;
        self.favorites = FavoriteSet::from_ids(ids);
        info!(user.id = %self.user_id, count = self.favorites.len(), "Loaded favorites");
        Ok(&self.favorites)
    }

    /// Flip `recipe_id`, returning true if it is now a favorite
    ///
    /// # Errors
    ///
    /// Returns the backend error; the local set is left unchanged
    pub async fn toggle(&mut self, recipe_id: i64) -> AppResult<bool> {
        if self.favorites.contains(recipe_id) {
            self.client.remove_favorite(self.user_id, recipe_id).await?;
        } else {
            self.client.add_favorite(self.user_id, recipe_id).await?;
        }
        Ok(self.favorites.toggle(recipe_id))
    }

    /// Whether `recipe_id` is a favorite
    #[must_use]
    pub fn is_favorite(&self, recipe_id: i64) -> bool {
        self.favorites.contains(recipe_id)
    }

    /// Current favorites
    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Favorite cards among `cards`
    #[must_use]
    pub fn favorite_cards<'a>(&self, cards: &'a [RecipeCard]) -> Vec<&'a RecipeCard> {
        self.favorites.select(cards)
    }
}
