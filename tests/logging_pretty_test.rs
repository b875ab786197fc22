// ABOUTME: Integration test for the human-readable pretty log format
// ABOUTME: Runs in its own process so the global subscriber can be installed once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrient_navigator::logging::{LogFormat, LoggingConfig};

#[test]
fn test_pretty_subscriber_installs() {
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        include_location: true,
        ..LoggingConfig::default()
    };
    config.init().unwrap();

    tracing::info!(ingredients = 3, "pretty logging is live");
    assert!(config.init().is_err());
}
