// ABOUTME: Grocery price lookup returning store quotes for an item
// ABOUTME: Serves the fixed mock quotes used while live store lookups are unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use crate::models::PriceQuote;

const PRODUCT_URL: &str = "#";

/// Store quote as static data
struct MockQuote {
    store: &'static str,
    price: f64,
    unit: &'static str,
    distance: &'static str,
    logo: &'static str,
}

const fn quote(
    store: &'static str,
    price: f64,
    unit: &'static str,
    distance: &'static str,
    logo: &'static str,
) -> MockQuote {
    MockQuote {
        store,
        price,
        unit,
        distance,
        logo,
    }
}

const MILK: &[MockQuote] = &[
    quote("Walmart", 4.99, "4L", "2.5 km", "🏪"),
    quote("Loblaws", 5.49, "4L", "1.8 km", "🛒"),
    quote("Metro", 5.29, "4L", "3.2 km", "🏬"),
];

const BREAD: &[MockQuote] = &[
    quote("Walmart", 2.49, "loaf", "2.5 km", "🏪"),
    quote("Loblaws", 2.99, "loaf", "1.8 km", "🛒"),
];

const EGGS: &[MockQuote] = &[
    quote("Walmart", 3.99, "dozen", "2.5 km", "🏪"),
    quote("Costco", 6.99, "18 pack", "5.0 km", "📦"),
];

const GENERIC: &[MockQuote] = &[
    quote("Walmart", 3.99, "each", "2.5 km", "🏪"),
    quote("Loblaws", 4.49, "each", "1.8 km", "🛒"),
];

/// Price lookup over nearby stores
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceLookup;

impl PriceLookup {
    /// Mock quotes for `query`, cheapest first
    ///
    /// Milk, bread and eggs are recognised by case-insensitive substring, checked
    /// in that order. Anything else gets the generic per-item quotes.
    #[must_use]
    pub fn mock_prices(query: &str) -> Vec<PriceQuote> {
        let lower = query.to_lowercase();
        let table = if lower.contains("milk") {
            MILK
        } else if lower.contains("bread") {
            BREAD
        } else if lower.contains("eggs") {
            EGGS
        } else {
            GENERIC
        };

        let mut quotes: Vec<PriceQuote> = table
            .iter()
            .map(|q| PriceQuote {
                store: q.store.to_owned(),
                price: q.price,
                unit: q.unit.to_owned(),
                distance: q.distance.to_owned(),
                logo: q.logo.to_owned(),
                product_url: PRODUCT_URL.to_owned(),
            })
            .collect();
        quotes.sort_by(|a, b| a.price.total_cmp(&b.price));

        debug!(query, quotes = quotes.len(), "Served mock price quotes");
        quotes
    }
}
