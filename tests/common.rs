// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides stub HTTP servers, test clients, and sample data builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutrient_navigator`
//!
//! Client tests run against small axum routers bound to an ephemeral local port,
//! so no test ever reaches a real external service.

use std::time::Duration;

use axum::Router;
use nutrient_navigator::models::{Food, Recipe};
use tokio::net::TcpListener;

/// Serve `router` on 127.0.0.1 and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// HTTP client with short timeouts for stub servers
pub fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("test http client")
}

/// Base URL nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

/// The two-recipe catalog fragment used by the matcher scenarios
pub fn fragment_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "A",
            "Recipe A",
            &["Eggs", "Rice", "Soy Sauce", "Green Onion"],
            "Lunch/Dinner",
            "https://example.com/a",
        ),
        Recipe::new(
            "B",
            "Recipe B",
            &["Pasta", "Tomato", "Garlic", "Olive Oil"],
            "Lunch/Dinner",
            "https://example.com/b",
        ),
    ]
}

/// Backend food with the given tags
pub fn sample_food(id: i64, name: &str, main_nutrition: &str, tags: &[&str]) -> Food {
    Food {
        id,
        name: name.to_owned(),
        main_nutrition: Some(main_nutrition.to_owned()),
        ingredients: Vec::new(),
        recipes: Vec::new(),
        recommendations: Vec::new(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
    }
}
