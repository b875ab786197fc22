// ABOUTME: USDA FoodData Central API client for nutritional data retrieval
// ABOUTME: Implements food search, detail retrieval, nutrient profiles, caching, and rate limiting

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! USDA `FoodData` Central API Client
//!
//! # Features
//! - Food search with nutrients per hit
//! - Detailed food information retrieval
//! - Nutrient profiles (calories plus annotated nutrients) for a free-text query
//! - TTL caching to minimize API calls
//! - Rate limiting per minute
//! - Mock client for testing
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use super::http_client::shared_client;
use super::{status_error, transport_error, NutrientSource};
use crate::cache::InMemoryCache;
use crate::config::UsdaConfig;
use crate::constants::{defaults, limits};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{NutrientProfile, UsdaNutrient};
use async_trait::async_trait;
use navigator_intelligence::nutrients::nutrient_profile;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info};

const SERVICE: &str = "USDA API";

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API
    pub base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl_secs: u64,
    /// Rate limit per minute
    pub rate_limit_per_minute: u32,
    /// Maximum entries kept in each response cache
    pub cache_capacity: usize,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: defaults::USDA_BASE_URL.to_owned(),
            cache_ttl_secs: defaults::CACHE_TTL_SECS,
            rate_limit_per_minute: defaults::USDA_RATE_LIMIT_PER_MINUTE,
            cache_capacity: defaults::USDA_CACHE_CAPACITY,
        }
    }
}

impl UsdaClientConfig {
    /// Build from the environment configuration
    #[must_use]
    pub fn from_config(usda: &UsdaConfig, cache_ttl_secs: u64) -> Self {
        Self {
            api_key: usda.api_key.clone().unwrap_or_default(),
            base_url: usda.base_url.clone(),
            cache_ttl_secs,
            rate_limit_per_minute: usda.rate_limit_per_minute,
            cache_capacity: defaults::USDA_CACHE_CAPACITY,
        }
    }
}

/// USDA Food Search Result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResult {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Data type (e.g., "Survey (FNDDS)", "Foundation", "SR Legacy")
    #[serde(default)]
    pub data_type: Option<String>,
    /// Brand owner (for branded foods)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_owner: Option<String>,
    /// Nutrients reported with the hit
    #[serde(default)]
    pub food_nutrients: Vec<UsdaNutrient>,
}

/// Detailed USDA Food Information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetails {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Data type
    pub data_type: Option<String>,
    /// Nutrients with amounts per 100g
    pub food_nutrients: Vec<UsdaNutrient>,
    /// Portion size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Portion unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size_unit: Option<String>,
}

/// USDA API search request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    page_size: u32,
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodSearchResult>,
}

/// USDA API food details response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetailsResponse {
    fdc_id: u64,
    description: String,
    data_type: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrientResponse>,
    serving_size: Option<f64>,
    serving_size_unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrientResponse {
    nutrient: Option<NutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    name: String,
    #[serde(rename = "unitName")]
    unit_name: String,
}

/// Sliding-window rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: VecDeque<Instant>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: VecDeque::new(),
            limit: limit.max(1) as usize,
            window,
        }
    }

    /// Time to wait before the next request, if any
    fn delay_needed(&mut self, now: Instant) -> Option<Duration> {
        while self
            .requests
            .front()
            .is_some_and(|&t| now.duration_since(t) >= self.window)
        {
            self.requests.pop_front();
        }
        if self.requests.len() < self.limit {
            return None;
        }
        self.requests
            .front()
            .map(|&oldest| self.window.saturating_sub(now.duration_since(oldest)))
    }

    /// Wait until a request can be made, then record it
    async fn acquire(&mut self) {
        while let Some(delay) = self.delay_needed(Instant::now()) {
            debug!(delay_ms = delay.as_millis() as u64, "USDA rate limit reached, waiting");
            tokio::time::sleep(delay).await;
        }
        self.requests.push_back(Instant::now());
    }
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
    search_cache: InMemoryCache<Vec<FoodSearchResult>>,
    details_cache: InMemoryCache<FoodDetails>,
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl UsdaClient {
    /// Create a new USDA API client on the shared HTTP client
    #[must_use]
    pub fn new(config: UsdaClientConfig) -> Self {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client using a specific HTTP client
    #[must_use]
    pub fn with_http_client(config: UsdaClientConfig, http_client: reqwest::Client) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));
        let ttl = Duration::from_secs(config.cache_ttl_secs);

        Self {
            search_cache: InMemoryCache::new(config.cache_capacity, ttl),
            details_cache: InMemoryCache::new(config.cache_capacity, ttl),
            config,
            http_client,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        }
    }

    fn ensure_api_key(&self) -> AppResult<()> {
        if self.config.api_key.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigMissing,
                "USDA_API_KEY is not configured",
            ));
        }
        Ok(())
    }

    /// Search for foods by query string
    ///
    /// # Arguments
    /// * `query` - Search query (e.g., "apple", "chicken breast")
    /// * `page_size` - Number of results to return (1-200)
    ///
    /// # Errors
    /// Returns error if the input is invalid, the key is missing, or the API request fails
    pub async fn search_foods(
        &self,
        query: &str,
        page_size: u32,
    ) -> AppResult<Vec<FoodSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        if page_size == 0 || page_size > limits::USDA_MAX_PAGE_SIZE {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("Page size must be between 1 and {}", limits::USDA_MAX_PAGE_SIZE),
            ));
        }

        let cache_key = format!("{}:{page_size}", query.to_lowercase());
        if let Some(hit) = self.search_cache.get(&cache_key).await {
            debug!(query, "USDA search cache hit");
            return Ok(hit);
        }

        self.ensure_api_key()?;
        self.rate_limiter.lock().await.acquire().await;

        let url = format!("{}/foods/search", self.config.base_url);
        let response = self
            .http_client
            .post(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .json(&SearchRequest { query, page_size })
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(SERVICE, status, &body));
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        info!(query, hits = search_response.foods.len(), "USDA food search");

        self.search_cache
            .set(cache_key, search_response.foods.clone())
            .await;

        Ok(search_response.foods)
    }

    /// Get detailed information for a specific food by FDC ID
    ///
    /// # Errors
    /// Returns error if the key is missing, the API request fails, or the food is unknown
    pub async fn get_food_details(&self, fdc_id: u64) -> AppResult<FoodDetails> {
        let cache_key = fdc_id.to_string();
        if let Some(hit) = self.details_cache.get(&cache_key).await {
            return Ok(hit);
        }

        self.ensure_api_key()?;
        self.rate_limiter.lock().await.acquire().await;

        let url = format!("{}/food/{fdc_id}", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(SERVICE, status, &body));
        }

        let details_response: FoodDetailsResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let food_nutrients = details_response
            .food_nutrients
            .into_iter()
            .filter_map(|n| {
                let nutrient = n.nutrient?;
                Some(UsdaNutrient {
                    nutrient_name: nutrient.name,
                    unit_name: nutrient.unit_name,
                    value: Some(n.amount.unwrap_or(0.0)),
                })
            })
            .collect();

        let food_details = FoodDetails {
            fdc_id: details_response.fdc_id,
            description: details_response.description,
            data_type: details_response.data_type,
            food_nutrients,
            serving_size: details_response.serving_size,
            serving_size_unit: details_response.serving_size_unit,
        };

        self.details_cache.set(cache_key, food_details.clone()).await;

        Ok(food_details)
    }

    /// Clear all caches
    pub async fn clear_caches(&self) {
        self.search_cache.clear().await;
        self.details_cache.clear().await;
    }

    /// Number of cached searches and cached details
    pub async fn cache_stats(&self) -> (usize, usize) {
        (self.search_cache.len().await, self.details_cache.len().await)
    }
}

/// Profile the first search hit, or fail with the not-found message shown to users
fn profile_first_hit(foods: &[FoodSearchResult]) -> AppResult<NutrientProfile> {
    foods
        .first()
        .map(|food| nutrient_profile(&food.description, &food.food_nutrients))
        .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound, "No food found with that name"))
}

#[async_trait]
impl NutrientSource for UsdaClient {
    async fn nutrient_profile(&self, query: &str) -> AppResult<NutrientProfile> {
        let foods = self.search_foods(query, 1).await?;
        profile_first_hit(&foods)
    }
}

/// Mock USDA client for testing (no API calls)
pub struct MockUsdaClient {
    mock_foods: Vec<FoodDetails>,
}

fn mock_nutrient(name: &str, unit: &str, value: f64) -> UsdaNutrient {
    UsdaNutrient {
        nutrient_name: name.to_owned(),
        unit_name: unit.to_owned(),
        value: Some(value),
    }
}

impl MockUsdaClient {
    /// Create a new mock client with predefined test data
    #[must_use]
    pub fn new() -> Self {
        let mock_foods = vec![
            FoodDetails {
                fdc_id: 171_477,
                description: "Chicken, breast, meat only, cooked, roasted".to_owned(),
                data_type: Some("SR Legacy".to_owned()),
                food_nutrients: vec![
                    mock_nutrient("Protein", "G", 31.02),
                    mock_nutrient("Total lipid (fat)", "G", 3.57),
                    mock_nutrient("Carbohydrate, by difference", "G", 0.0),
                    mock_nutrient("Energy", "KCAL", 165.0),
                    mock_nutrient("Iron, Fe", "MG", 1.04),
                ],
                serving_size: Some(100.0),
                serving_size_unit: Some("g".to_owned()),
            },
            FoodDetails {
                fdc_id: 171_688,
                description: "Apples, raw, with skin".to_owned(),
                data_type: Some("SR Legacy".to_owned()),
                food_nutrients: vec![
                    mock_nutrient("Protein", "G", 0.26),
                    mock_nutrient("Total lipid (fat)", "G", 0.17),
                    mock_nutrient("Carbohydrate, by difference", "G", 13.81),
                    mock_nutrient("Energy", "KCAL", 52.0),
                    mock_nutrient("Fiber, total dietary", "G", 2.4),
                    mock_nutrient("Vitamin C, total ascorbic acid", "MG", 4.6),
                ],
                serving_size: Some(182.0),
                serving_size_unit: Some("g".to_owned()),
            },
        ];

        Self { mock_foods }
    }

    /// Mock search implementation
    ///
    /// # Errors
    /// Returns `InvalidInput` if query is empty
    pub fn search_foods(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let query_lower = query.to_lowercase();
        Ok(self
            .mock_foods
            .iter()
            .filter(|food| food.description.to_lowercase().contains(&query_lower))
            .take(page_size as usize)
            .map(|food| FoodSearchResult {
                fdc_id: food.fdc_id,
                description: food.description.clone(),
                data_type: food.data_type.clone(),
                brand_owner: None,
                food_nutrients: food.food_nutrients.clone(),
            })
            .collect())
    }

    /// Mock details implementation
    ///
    /// # Errors
    /// Returns `ResourceNotFound` if food with given FDC ID doesn't exist
    pub fn get_food_details(&self, fdc_id: u64) -> AppResult<FoodDetails> {
        self.mock_foods
            .iter()
            .find(|food| food.fdc_id == fdc_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Food with FDC ID {fdc_id}")))
    }
}

impl Default for MockUsdaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NutrientSource for MockUsdaClient {
    async fn nutrient_profile(&self, query: &str) -> AppResult<NutrientProfile> {
        let foods = self.search_foods(query, 1)?;
        profile_first_hit(&foods)
    }
}
