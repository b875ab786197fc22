// ABOUTME: Shared HTTP client with connection pooling for external API calls
// ABOUTME: Singleton with configurable timeouts initialized once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpConfig;
use crate::constants::defaults::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record the timeouts for the shared HTTP client
///
/// Only the first call has any effect, and only if no client was built yet.
pub fn initialize_shared_client(config: &HttpConfig) {
    if CLIENT_TIMEOUTS
        .set((config.timeout_secs, config.connect_timeout_secs))
        .is_err()
    {
        warn!("Shared HTTP client timeouts already initialized");
    }
}

/// Get the shared HTTP client for external API calls
///
/// Falls back to default timeouts if [`initialize_shared_client`] was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((HTTP_TIMEOUT_SECS, HTTP_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .user_agent(concat!("nutrient-navigator/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
