// ABOUTME: Caching for external lookups keyed by string with per-entry expiry
// ABOUTME: Exposes the in-memory LRU cache used for recipe image URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory cache implementation
pub mod memory;

pub use memory::InMemoryCache;
