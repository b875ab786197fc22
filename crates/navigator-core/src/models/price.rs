// ABOUTME: Grocery price quotes from nearby stores
// ABOUTME: PriceQuote definition shared by the price lookup and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single store's price for an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Store name
    pub store: String,
    /// Price in local currency
    pub price: f64,
    /// Unit the price applies to (e.g. "4L", "loaf")
    pub unit: String,
    /// Distance to the store
    pub distance: String,
    /// Store logo glyph
    pub logo: String,
    /// Product page link
    pub product_url: String,
}
