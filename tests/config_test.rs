// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Verifies defaults, overrides, secret handling, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use nutrient_navigator::config::{Environment, NavigatorConfig};
use serial_test::serial;

const VARS: &[&str] = &[
    "ENVIRONMENT",
    "NAVIGATOR_API_BASE_URL",
    "USDA_API_KEY",
    "USDA_BASE_URL",
    "USDA_RATE_LIMIT_PER_MINUTE",
    "UNSPLASH_ACCESS_KEY",
    "UNSPLASH_BASE_URL",
    "NAVIGATOR_IMAGE_BATCH_DELAY_MS",
    "NAVIGATOR_CATALOG_PATH",
    "NAVIGATOR_CACHE_TTL_SECS",
    "NAVIGATOR_HTTP_TIMEOUT_SECS",
    "NAVIGATOR_HTTP_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = NavigatorConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.backend.base_url, "http://localhost:8080");
    assert_eq!(config.usda.base_url, "https://api.nal.usda.gov/fdc/v1");
    assert!(config.usda.api_key.is_none());
    assert!(config.images.access_key.is_none());
    assert!(config.catalog_path.is_none());
    assert_eq!(config.cache_ttl_secs, 86_400);
    assert_eq!(config.http.timeout_secs, 30);
}

#[test]
#[serial]
fn test_overrides_and_trailing_slash() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("NAVIGATOR_API_BASE_URL", "https://recipes.example.com/");
    env::set_var("USDA_API_KEY", "usda-secret-1234");
    env::set_var("NAVIGATOR_CATALOG_PATH", "/etc/navigator/recipes.yaml");
    env::set_var("NAVIGATOR_CACHE_TTL_SECS", "60");

    let config = NavigatorConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.backend.base_url, "https://recipes.example.com");
    assert_eq!(config.usda.api_key.as_deref(), Some("usda-secret-1234"));
    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/etc/navigator/recipes.yaml"))
    );
    assert_eq!(config.cache_ttl_secs, 60);

    let summary = config.summary();
    assert!(summary.contains("****1234"));
    assert!(!summary.contains("usda-secret"));
}

#[test]
#[serial]
fn test_placeholder_key_is_unset() {
    clear_env();
    env::set_var("UNSPLASH_ACCESS_KEY", "YOUR_ACCESS_KEY_HERE");
    env::set_var("USDA_API_KEY", "   ");

    let config = NavigatorConfig::from_env().unwrap();
    clear_env();

    assert!(config.images.access_key.is_none());
    assert!(config.usda.api_key.is_none());
    assert!(config.summary().contains("not set"));
}

#[test]
#[serial]
fn test_invalid_values_are_errors() {
    clear_env();
    env::set_var("NAVIGATOR_HTTP_TIMEOUT_SECS", "soon");
    let err = NavigatorConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("NAVIGATOR_HTTP_TIMEOUT_SECS"));

    clear_env();
    env::set_var("NAVIGATOR_API_BASE_URL", "ftp://recipes.example.com");
    let err = NavigatorConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("NAVIGATOR_API_BASE_URL"));
    clear_env();
}
