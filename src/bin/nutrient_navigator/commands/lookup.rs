// ABOUTME: Nutrient, price, and image lookup commands
// ABOUTME: Chooses live or sample nutrient data and resolves recipe photos in batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutrient_navigator::config::NavigatorConfig;
use nutrient_navigator::external::{
    ImageClient, ImageClientConfig, MockUsdaClient, NutrientSource, UsdaClient, UsdaClientConfig,
};
use nutrient_navigator::prices::PriceLookup;
use tracing::info;

use crate::helpers::display::{print_images, print_prices, print_profile, OutputFormat};

/// Look up one food's nutrients
pub async fn nutrients(
    config: &NavigatorConfig,
    food: &str,
    mock: bool,
    format: OutputFormat,
) -> Result<()> {
    let source: Box<dyn NutrientSource> = if mock {
        info!("Using sample nutrient data");
        Box::new(MockUsdaClient::new())
    } else {
        Box::new(UsdaClient::new(UsdaClientConfig::from_config(
            &config.usda,
            config.cache_ttl_secs,
        )))
    };

    let profile = source.nutrient_profile(food).await?;
    print_profile(&profile, format)
}

/// Show store prices for an item
pub fn prices(item: &str, format: OutputFormat) -> Result<()> {
    print_prices(item, &PriceLookup::mock_prices(item), format)
}

/// Resolve a photo for each recipe name
pub async fn images(config: &NavigatorConfig, names: &[String], format: OutputFormat) -> Result<()> {
    let client = ImageClient::new(ImageClientConfig::from_config(config));
    let resolved = client.batch_fetch(names).await;
    print_images(&resolved, format)
}
