// ABOUTME: Core types and constants for the Nutrient Navigator workspace
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Navigator Core
//!
//! Foundation crate providing shared types and constants for the Nutrient
//! Navigator workspace. It changes rarely so the algorithm crate and the
//! client crate can compile against it independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Defaults and limits organized by domain
//! - **models**: Recipes, match results, foods, nutrients, household items, prices

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models shared across the workspace
pub mod models;
