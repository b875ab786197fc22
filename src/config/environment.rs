// ABOUTME: Environment configuration for the navigator clients and CLI
// ABOUTME: Reads endpoints, API keys, catalog location, and HTTP tuning from environment variables
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration

use crate::constants::defaults;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// Placeholder some deployments leave in place of a real access key
const KEY_PLACEHOLDER: &str = "YOUR_ACCESS_KEY_HERE";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Recipe and household backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, without the `/api` suffix
    pub base_url: String,
}

/// USDA `FoodData` Central access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdaConfig {
    /// API key, absent when not configured
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Requests allowed per minute
    pub rate_limit_per_minute: u32,
}

/// Photo search access for recipe images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Access key, absent when not configured
    pub access_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Delay between uncached lookups in a batch
    pub batch_delay_ms: u64,
}

/// Shared HTTP client tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// Connection timeout
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete navigator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Backend API
    pub backend: BackendConfig,
    /// USDA nutrient data
    pub usda: UsdaConfig,
    /// Recipe images
    pub images: ImageConfig,
    /// Catalog file replacing the built-in recipes
    pub catalog_path: Option<PathBuf>,
    /// TTL for cached external lookups
    pub cache_ttl_secs: u64,
    /// HTTP client tuning
    pub http: HttpConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            backend: BackendConfig {
                base_url: defaults::API_BASE_URL.to_owned(),
            },
            usda: UsdaConfig {
                api_key: None,
                base_url: defaults::USDA_BASE_URL.to_owned(),
                rate_limit_per_minute: defaults::USDA_RATE_LIMIT_PER_MINUTE,
            },
            images: ImageConfig {
                access_key: None,
                base_url: defaults::UNSPLASH_BASE_URL.to_owned(),
                batch_delay_ms: defaults::IMAGE_BATCH_DELAY_MS,
            },
            catalog_path: None,
            cache_ttl_secs: defaults::CACHE_TTL_SECS,
            http: HttpConfig::default(),
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or a URL is malformed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            backend: BackendConfig {
                base_url: parse_base_url(
                    "NAVIGATOR_API_BASE_URL",
                    &env_var_or("NAVIGATOR_API_BASE_URL", defaults::API_BASE_URL),
                )?,
            },
            usda: UsdaConfig {
                api_key: secret_var("USDA_API_KEY"),
                base_url: parse_base_url(
                    "USDA_BASE_URL",
                    &env_var_or("USDA_BASE_URL", defaults::USDA_BASE_URL),
                )?,
                rate_limit_per_minute: env_var_or(
                    "USDA_RATE_LIMIT_PER_MINUTE",
                    &defaults::USDA_RATE_LIMIT_PER_MINUTE.to_string(),
                )
                .parse()
                .context("Invalid USDA_RATE_LIMIT_PER_MINUTE value")?,
            },
            images: ImageConfig {
                access_key: secret_var("UNSPLASH_ACCESS_KEY"),
                base_url: parse_base_url(
                    "UNSPLASH_BASE_URL",
                    &env_var_or("UNSPLASH_BASE_URL", defaults::UNSPLASH_BASE_URL),
                )?,
                batch_delay_ms: env_var_or(
                    "NAVIGATOR_IMAGE_BATCH_DELAY_MS",
                    &defaults::IMAGE_BATCH_DELAY_MS.to_string(),
                )
                .parse()
                .context("Invalid NAVIGATOR_IMAGE_BATCH_DELAY_MS value")?,
            },
            catalog_path: env::var("NAVIGATOR_CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            cache_ttl_secs: env_var_or(
                "NAVIGATOR_CACHE_TTL_SECS",
                &defaults::CACHE_TTL_SECS.to_string(),
            )
            .parse()
            .context("Invalid NAVIGATOR_CACHE_TTL_SECS value")?,
            http: HttpConfig {
                timeout_secs: env_var_or(
                    "NAVIGATOR_HTTP_TIMEOUT_SECS",
                    &defaults::HTTP_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid NAVIGATOR_HTTP_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    "NAVIGATOR_HTTP_CONNECT_TIMEOUT_SECS",
                    &defaults::HTTP_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid NAVIGATOR_HTTP_CONNECT_TIMEOUT_SECS value")?,
            },
        };

        config.warn_on_missing_keys();
        Ok(config)
    }

    fn warn_on_missing_keys(&self) {
        if self.usda.api_key.is_none() {
            warn!("USDA_API_KEY not set, nutrient lookups will fail");
        }
        if self.images.access_key.is_none() {
            warn!("UNSPLASH_ACCESS_KEY not set, recipe images use placeholders");
        }
    }

    /// Human-readable configuration summary with secrets masked
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrient Navigator Configuration:\n\
             - Environment: {}\n\
             - Backend API: {}\n\
             - USDA API: {} (key: {}, {} req/min)\n\
             - Image API: {} (key: {})\n\
             - Catalog: {}\n\
             - Cache TTL: {}s\n\
             - HTTP Timeout: {}s (connect {}s)",
            self.environment,
            self.backend.base_url,
            self.usda.base_url,
            mask_secret(self.usda.api_key.as_deref()),
            self.usda.rate_limit_per_minute,
            self.images.base_url,
            mask_secret(self.images.access_key.as_deref()),
            self.catalog_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
            self.cache_ttl_secs,
            self.http.timeout_secs,
            self.http.connect_timeout_secs,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Secret variable, treating blanks and the placeholder as unset
fn secret_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty() && value != KEY_PLACEHOLDER)
}

/// Validate a base URL and strip trailing slashes
fn parse_base_url(key: &str, value: &str) -> Result<String> {
    let parsed = Url::parse(value).with_context(|| format!("Invalid {key} value: {value}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("Invalid {key} value: {value} (expected http or https)");
    }
    Ok(value.trim_end_matches('/').to_owned())
}

/// Show only the last four characters of a secret
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "not set".to_owned(),
        Some(value) if value.chars().count() <= 4 => "****".to_owned(),
        Some(value) => {
            let tail: String = value
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("****{tail}")
        }
    }
}
