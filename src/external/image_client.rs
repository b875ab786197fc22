// ABOUTME: Recipe photo lookup against the Unsplash search API with cached results
// ABOUTME: Falls back to placeholder photos on missing keys, failures, or empty results

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recipe image client
//!
//! Lookups never fail from the caller's point of view: every problem is logged
//! and answered with the placeholder photo for the recipe's position.

use super::http_client::shared_client;
use super::{status_error, transport_error};
use crate::cache::InMemoryCache;
use crate::config::NavigatorConfig;
use crate::constants::{defaults, images};
use crate::errors::{AppError, AppResult};
use navigator_intelligence::images::{
    best_image_url, cache_key, clean_query, fallback_image_url, PhotoCandidate,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const SERVICE: &str = "Unsplash API";

/// Image client configuration
#[derive(Debug, Clone)]
pub struct ImageClientConfig {
    /// Access key, lookups use placeholders without one
    pub access_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// TTL for resolved URLs
    pub cache_ttl: Duration,
    /// Maximum number of cached URLs
    pub cache_capacity: usize,
    /// Delay between uncached lookups in a batch
    pub batch_delay: Duration,
}

impl Default for ImageClientConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: defaults::UNSPLASH_BASE_URL.to_owned(),
            cache_ttl: Duration::from_secs(defaults::CACHE_TTL_SECS),
            cache_capacity: defaults::IMAGE_CACHE_CAPACITY,
            batch_delay: Duration::from_millis(defaults::IMAGE_BATCH_DELAY_MS),
        }
    }
}

impl ImageClientConfig {
    /// Build from the environment configuration
    #[must_use]
    pub fn from_config(config: &NavigatorConfig) -> Self {
        Self {
            access_key: config.images.access_key.clone(),
            base_url: config.images.base_url.clone(),
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            cache_capacity: defaults::IMAGE_CACHE_CAPACITY,
            batch_delay: Duration::from_millis(config.images.batch_delay_ms),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhotoSearchResponse {
    #[serde(default)]
    results: Vec<PhotoCandidate>,
}

/// Recipe image lookup with caching
#[derive(Clone)]
pub struct ImageClient {
    config: ImageClientConfig,
    http_client: reqwest::Client,
    cache: InMemoryCache<String>,
}

impl ImageClient {
    /// Create a client on the shared HTTP client
    #[must_use]
    pub fn new(config: ImageClientConfig) -> Self {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client using a specific HTTP client
    #[must_use]
    pub fn with_http_client(config: ImageClientConfig, http_client: reqwest::Client) -> Self {
        let cache = InMemoryCache::new(config.cache_capacity, config.cache_ttl);
        Self {
            config,
            http_client,
            cache,
        }
    }

    /// Image URL for `query`, or the placeholder for `fallback_index`
    pub async fn recipe_image(&self, query: &str, fallback_index: usize) -> String {
        let fallback = fallback_image_url(fallback_index);

        let Some(access_key) = self.config.access_key.as_deref() else {
            warn!("Photo search access key not configured, using fallback image");
            return fallback;
        };

        match self.search(access_key, query).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(query, "No usable photo found, using fallback image");
                fallback
            }
            Err(e) => {
                warn!(query, error = %e, "Photo search failed, using fallback image");
                fallback
            }
        }
    }

    async fn search(&self, access_key: &str, query: &str) -> AppResult<Option<String>> {
        let cleaned = clean_query(query);
        if cleaned.trim().is_empty() {
            return Err(AppError::invalid_input("Image query has no searchable words"));
        }

        let per_page = images::SEARCH_PER_PAGE.to_string();
        let response = self
            .http_client
            .get(format!("{}/search/photos", self.config.base_url))
            .query(&[
                ("query", cleaned.as_str()),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
            ])
            .header(reqwest::header::AUTHORIZATION, format!("Client-ID {access_key}"))
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(SERVICE, status, &body));
        }

        let photos: PhotoSearchResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        Ok(best_image_url(&photos.results, &cleaned))
    }

    /// Cached image URL for a recipe name
    pub async fn cached_recipe_image(&self, recipe_name: &str, fallback_index: usize) -> String {
        let key = cache_key(recipe_name);
        if let Some(url) = self.cache.get(&key).await {
            return url;
        }

        let url = self.recipe_image(recipe_name, fallback_index).await;
        self.cache.set(key, url.clone()).await;
        url
    }

    /// Image URLs for `names`, in order, pausing between uncached lookups
    pub async fn batch_fetch<S: AsRef<str>>(&self, names: &[S]) -> Vec<(String, String)> {
        let mut resolved = Vec::with_capacity(names.len());
        let mut looked_up = false;

        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let key = cache_key(name);

            let url = if let Some(url) = self.cache.get(&key).await {
                url
            } else {
                if looked_up && self.config.access_key.is_some() {
                    tokio::time::sleep(self.config.batch_delay).await;
                }
                let url = self.recipe_image(name, index).await;
                self.cache.set(key, url.clone()).await;
                looked_up = true;
                url
            };

            resolved.push((name.to_owned(), url));
        }

        resolved
    }

    /// Number of cached image URLs
    pub async fn cached_count(&self) -> usize {
        self.cache.len().await
    }
}
