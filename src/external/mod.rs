// ABOUTME: External API clients for the backend, USDA FoodData Central, and photo search
// ABOUTME: Shares one HTTP client and maps HTTP failures onto application error codes

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients
//!
//! - [`backend_client`]: foods, favorites, and household endpoints of the recipe backend
//! - [`usda_client`]: nutrient data from USDA `FoodData` Central
//! - [`image_client`]: recipe photos from the Unsplash search API

pub mod backend_client;
pub mod http_client;
pub mod image_client;
pub mod usda_client;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::NutrientProfile;
use async_trait::async_trait;
use reqwest::StatusCode;

// Re-export commonly used types
pub use backend_client::BackendClient;
pub use image_client::{ImageClient, ImageClientConfig};
pub use usda_client::{
    FoodDetails, FoodSearchResult, MockUsdaClient, UsdaClient, UsdaClientConfig,
};

/// Source of per-food nutrient summaries
#[async_trait]
pub trait NutrientSource: Send + Sync {
    /// Calories and annotated nutrients for the best match of `query`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches, or the source's own failure
    async fn nutrient_profile(&self, query: &str) -> AppResult<NutrientProfile>;
}

/// Map a non-success HTTP status from `service` onto an application error
pub(crate) fn status_error(service: &str, status: StatusCode, body: &str) -> AppError {
    let detail = if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {}", body.trim())
    };

    match status {
        StatusCode::NOT_FOUND => AppError::new(
            ErrorCode::ResourceNotFound,
            format!("{service}: {detail}"),
        ),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::new(
            ErrorCode::ExternalAuthFailed,
            format!("{service}: {detail}"),
        ),
        StatusCode::TOO_MANY_REQUESTS => AppError::new(
            ErrorCode::ExternalRateLimited,
            format!("{service}: {detail}"),
        ),
        _ => AppError::external_service(service, detail),
    }
}

/// Map a transport failure from `service` onto an application error
pub(crate) fn transport_error(service: &str, error: reqwest::Error) -> AppError {
    if error.is_decode() {
        return AppError::serialization(format!("{service}: invalid response body: {error}"))
            .with_source(error);
    }
    AppError::external_unavailable(service, error.to_string()).with_source(error)
}
