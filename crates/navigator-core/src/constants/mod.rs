// ABOUTME: Application constants organized by domain
// ABOUTME: Service defaults, external API endpoints, household rules, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identity
pub mod service_names {
    /// Service name used in structured logs
    pub const NUTRIENT_NAVIGATOR: &str = "nutrient-navigator";
}

/// Default endpoints and tuning values
pub mod defaults {
    /// Base URL of the recipe/household backend
    pub const API_BASE_URL: &str = "http://localhost:8080";
    /// USDA `FoodData` Central base URL
    pub const USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
    /// Unsplash API base URL
    pub const UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
    /// Cache TTL for external lookups (24 hours)
    pub const CACHE_TTL_SECS: u64 = 86_400;
    /// USDA requests allowed per minute
    pub const USDA_RATE_LIMIT_PER_MINUTE: u32 = 30;
    /// HTTP request timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// HTTP connect timeout
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Maximum entries kept in each USDA response cache
    pub const USDA_CACHE_CAPACITY: usize = 1_000;
    /// Maximum entries kept in the image URL cache
    pub const IMAGE_CACHE_CAPACITY: usize = 512;
    /// Delay between uncached image lookups in a batch (Unsplash free tier)
    pub const IMAGE_BATCH_DELAY_MS: u64 = 100;
}

/// Hard limits on request parameters
pub mod limits {
    /// Largest page size the USDA search endpoint accepts
    pub const USDA_MAX_PAGE_SIZE: u32 = 200;
}

/// Recipe image lookup
pub mod images {
    /// Results requested per image search
    pub const SEARCH_PER_PAGE: u32 = 5;
    /// Photo id the fallback image sequence starts from
    pub const FALLBACK_PHOTO_BASE: u64 = 1_467_003_909_585;
    /// Cache key prefix for resolved recipe images
    pub const CACHE_KEY_PREFIX: &str = "recipe_image_";
}

/// Household inventory rules
pub mod household {
    /// Items expiring within this many days are flagged
    pub const EXPIRING_SOON_DAYS: u32 = 2;
    /// Quantity used when none is given
    pub const DEFAULT_QUANTITY: &str = "1";
    /// Member name recorded for locally added items
    pub const LOCAL_MEMBER: &str = "You";
}

/// Recipe browsing
pub mod browse {
    /// Description used when a food has no recommendations
    pub const DEFAULT_DESCRIPTION: &str = "Delicious and nutritious meal";
}
