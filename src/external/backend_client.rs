// ABOUTME: Typed HTTP client for the recipe backend's food, user, favorites, and household endpoints
// ABOUTME: Maps backend status codes onto application errors and decodes JSON bodies

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recipe backend client
//!
//! The backend itself is an external service. This client only speaks its REST
//! surface under `/api`.

use super::http_client::shared_client;
use super::{status_error, transport_error};
use crate::config::NavigatorConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Food, HouseholdInfo, InventoryRecord, NeededRecord, NewInventoryRecord, NewNeededRecord,
    ProfileResponse, UserProfile,
};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

const SERVICE: &str = "Backend API";

/// Client for the recipe and household backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl BackendClient {
    /// Create a client for `base_url` on the shared HTTP client
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, shared_client().clone())
    }

    /// Create a client using a specific HTTP client
    #[must_use]
    pub fn with_http_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        }
    }

    /// Create a client from the environment configuration
    #[must_use]
    pub fn from_config(config: &NavigatorConfig) -> Self {
        Self::new(config.backend.base_url.clone())
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "Backend request");
        self.http_client
            .request(method, format!("{}/api{path}", self.base_url))
    }

    async fn send(request: RequestBuilder) -> AppResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(SERVICE, status, &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = Self::send(self.request(Method::GET, path)).await?;
        response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> AppResult<Response> {
        Self::send(self.request(method, path).json(body)).await
    }

    async fn send_empty(&self, method: Method, path: &str) -> AppResult<()> {
        Self::send(self.request(method, path)).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Foods
    // ------------------------------------------------------------------

    /// All foods
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode
    pub async fn get_all_foods(&self) -> AppResult<Vec<Food>> {
        let foods: Vec<Food> = self.get_json("/foods").await?;
        info!(count = foods.len(), "Fetched foods");
        Ok(foods)
    }

    /// One food by id
    ///
    /// # Errors
    /// Returns `ResourceNotFound` for unknown ids, or a transport/decoding error
    pub async fn get_food(&self, id: i64) -> AppResult<Food> {
        self.get_json(&format!("/foods/{id}")).await
    }

    /// Foods whose name matches `name`
    ///
    /// # Errors
    /// Returns an error if `name` is blank, the request fails, or the body does not decode
    pub async fn search_foods(&self, name: &str) -> AppResult<Vec<Food>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Search name cannot be empty"));
        }
        let response = Self::send(
            self.request(Method::GET, "/foods/search")
                .query(&[("name", name)]),
        )
        .await?;
        response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))
    }

    /// Backend health message
    ///
    /// # Errors
    /// Returns an error if the backend is unreachable or unhealthy
    pub async fn health_check(&self) -> AppResult<String> {
        let response = Self::send(self.request(Method::GET, "/foods/health")).await?;
        response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE, e))
    }

    // ------------------------------------------------------------------
    // Users and favorites
    // ------------------------------------------------------------------

    /// Register a signed-up user, creating their household
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode
    pub async fn create_profile(&self, profile: &UserProfile) -> AppResult<ProfileResponse> {
        let response = self
            .send_json(Method::POST, "/users/profile", profile)
            .await?;
        let created: ProfileResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;
        info!(user.id = %profile.id, household.id = created.household_id, "Created user profile");
        Ok(created)
    }

    /// Favorite recipe ids of a user
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode
    pub async fn favorites(&self, user_id: Uuid) -> AppResult<Vec<i64>> {
        self.get_json(&format!("/users/{user_id}/favorites")).await
    }

    /// Mark a recipe as a favorite
    ///
    /// # Errors
    /// Returns an error if the request fails
    pub async fn add_favorite(&self, user_id: Uuid, recipe_id: i64) -> AppResult<()> {
        self.send_empty(Method::POST, &format!("/users/{user_id}/favorites/{recipe_id}"))
            .await
    }

    /// Unmark a favorite recipe
    ///
    /// # Errors
    /// Returns an error if the request fails
    pub async fn remove_favorite(&self, user_id: Uuid, recipe_id: i64) -> AppResult<()> {
        self.send_empty(Method::DELETE, &format!("/users/{user_id}/favorites/{recipe_id}"))
            .await
    }

    // ------------------------------------------------------------------
    // Household
    // ------------------------------------------------------------------

    /// Household a user belongs to
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode
    pub async fn household(&self, user_id: Uuid) -> AppResult<HouseholdInfo> {
        self.get_json(&format!("/users/{user_id}/household")).await
    }

    /// Inventory rows of a household, newest first
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode
    pub async fn inventory(&self, household_id: i64) -> AppResult<Vec<InventoryRecord>> {
        self.get_json(&format!("/users/household/{household_id}/inventory"))
            .await
    }

    /// Add an inventory row
    ///
    /// # Errors
    /// Returns an error if the name is blank or the request fails
    pub async fn add_inventory_item(
        &self,
        household_id: i64,
        item: &NewInventoryRecord,
    ) -> AppResult<()> {
        if item.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        self.send_json(
            Method::POST,
            &format!("/users/household/{household_id}/inventory"),
            item,
        )
        .await?;
        Ok(())
    }

    /// Delete an inventory row
    ///
    /// # Errors
    /// Returns an error if the request fails
    pub async fn delete_inventory_item(&self, item_id: i64) -> AppResult<()> {
        self.send_empty(Method::DELETE, &format!("/users/household/inventory/{item_id}"))
            .await
    }

    /// Shopping list rows of a household, newest first
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode
    pub async fn needed_items(&self, household_id: i64) -> AppResult<Vec<NeededRecord>> {
        self.get_json(&format!("/users/household/{household_id}/needed"))
            .await
    }

    /// Add a shopping list row
    ///
    /// # Errors
    /// Returns an error if the name is blank or the request fails
    pub async fn add_needed_item(&self, household_id: i64, item: &NewNeededRecord) -> AppResult<()> {
        if item.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        self.send_json(
            Method::POST,
            &format!("/users/household/{household_id}/needed"),
            item,
        )
        .await?;
        Ok(())
    }

    /// Delete a shopping list row
    ///
    /// # Errors
    /// Returns an error if the request fails
    pub async fn delete_needed_item(&self, item_id: i64) -> AppResult<()> {
        self.send_empty(Method::DELETE, &format!("/users/household/needed/{item_id}"))
            .await
    }
}
