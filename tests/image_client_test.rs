// ABOUTME: Integration tests for recipe photo lookup against a stub search API
// ABOUTME: Checks keyword ranking, request shape, fallbacks, caching, and batches
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use nutrient_navigator::external::{ImageClient, ImageClientConfig};
use nutrient_navigator::intelligence::images::fallback_image_url;
use serde_json::{json, Value};

use common::{closed_port_url, spawn_stub, test_http_client};

const ACCESS_KEY: &str = "unsplash-test";

#[derive(Clone, Default)]
struct StubState {
    hits: Arc<AtomicUsize>,
}

fn photo(alt: &str, small: &str) -> Value {
    json!({
        "alt_description": alt,
        "description": null,
        "urls": { "small": small, "regular": format!("{small}?regular") }
    })
}

async fn search_photos(
    State(state): State<StubState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Client-ID {ACCESS_KEY}");
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str());
    let shaped = params.get("per_page").map(String::as_str) == Some("5")
        && params.get("orientation").map(String::as_str) == Some("landscape");
    if !authorized || !shaped {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "errors": ["denied"] })));
    }

    let query = params.get("query").cloned().unwrap_or_default();
    let results = match query.as_str() {
        "egg fried rice" => json!([
            photo("a bowl of soup", "https://img.test/soup"),
            photo("fried rice with egg and scallions", "https://img.test/rice"),
            photo("egg fried rice close up", "https://img.test/rice-2"),
        ]),
        "pasta primavera" => json!([photo("mountain lake", "https://img.test/lake")]),
        "broken" => return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
        _ => json!([]),
    };
    (StatusCode::OK, Json(json!({ "total": 3, "results": results })))
}

async fn setup(access_key: Option<&str>) -> (ImageClient, StubState) {
    let state = StubState::default();
    let router = Router::new()
        .route("/search/photos", get(search_photos))
        .with_state(state.clone());
    let base_url = spawn_stub(router).await;

    let config = ImageClientConfig {
        access_key: access_key.map(str::to_owned),
        base_url,
        batch_delay: Duration::from_millis(1),
        ..ImageClientConfig::default()
    };
    (ImageClient::with_http_client(config, test_http_client()), state)
}

#[tokio::test]
async fn test_best_keyword_match_wins() {
    let (client, _) = setup(Some(ACCESS_KEY)).await;
    let url = client.recipe_image("  Egg Fried Rice! ", 0).await;
    assert_eq!(url, "https://img.test/rice");
}

#[tokio::test]
async fn test_first_result_when_nothing_scores() {
    let (client, _) = setup(Some(ACCESS_KEY)).await;
    assert_eq!(
        client.recipe_image("Pasta Primavera", 1).await,
        "https://img.test/lake"
    );
}

#[tokio::test]
async fn test_fallbacks_never_error() {
    let (client, state) = setup(Some(ACCESS_KEY)).await;
    assert_eq!(client.recipe_image("Mystery Stew", 2).await, fallback_image_url(2));
    assert_eq!(client.recipe_image("broken", 3).await, fallback_image_url(3));
    assert_eq!(client.recipe_image("!!!", 4).await, fallback_image_url(4));
    assert_eq!(state.hits.load(Ordering::SeqCst), 2);

    let (unauthorized, _) = setup(Some("wrong-key")).await;
    assert_eq!(
        unauthorized.recipe_image("egg fried rice", 0).await,
        fallback_image_url(0)
    );

    let offline = ImageClient::with_http_client(
        ImageClientConfig {
            access_key: Some(ACCESS_KEY.to_owned()),
            base_url: closed_port_url().await,
            ..ImageClientConfig::default()
        },
        test_http_client(),
    );
    assert_eq!(offline.recipe_image("egg fried rice", 5).await, fallback_image_url(5));
}

#[tokio::test]
async fn test_missing_key_uses_placeholder_without_calls() {
    let (client, state) = setup(None).await;
    let resolved = client.batch_fetch(&["Egg Fried Rice", "Burger Bowls"]).await;
    assert_eq!(resolved[0].1, fallback_image_url(0));
    assert_eq!(resolved[1].1, fallback_image_url(1));
    assert_eq!(state.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_batch_uses_cache() {
    let (client, state) = setup(Some(ACCESS_KEY)).await;

    let first = client.cached_recipe_image("Egg Fried Rice", 0).await;
    assert_eq!(first, "https://img.test/rice");

    let resolved = client
        .batch_fetch(&["Egg Fried Rice", "Pasta Primavera", "Egg Fried Rice"])
        .await;
    let names: Vec<&str> = resolved.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Egg Fried Rice", "Pasta Primavera", "Egg Fried Rice"]);
    assert_eq!(resolved[1].1, "https://img.test/lake");
    assert_eq!(resolved[2].1, "https://img.test/rice");

    assert_eq!(state.hits.load(Ordering::SeqCst), 2);
    assert_eq!(client.cached_count().await, 2);
}
