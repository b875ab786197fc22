// ABOUTME: Configuration module for the navigator clients and CLI
// ABOUTME: Re-exports environment-driven settings for endpoints, keys, and HTTP tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for Nutrient Navigator
//!
//! Everything is read from environment variables, see [`environment::NavigatorConfig::from_env`].

/// Environment variable configuration
pub mod environment;

pub use environment::{
    BackendConfig, Environment, HttpConfig, ImageConfig, NavigatorConfig, UsdaConfig,
};
