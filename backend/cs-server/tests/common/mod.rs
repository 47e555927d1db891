#![allow(dead_code)]

//! Test infrastructure for cs-server API tests

use cs_config::SuggestionConfig;
use cs_server::{ContentState, SuggestionState};
use cs_suggest::{RandomSource, SuggestionCatalog, SuggestionEngine};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = cs_db::create_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");

    cs_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create ContentState for testing
pub async fn create_content_state() -> ContentState {
    ContentState::new(create_test_pool().await)
}

/// Create SuggestionState over the sample catalog with a fixed seed
pub fn create_suggestion_state() -> SuggestionState {
    SuggestionState::new(
        SuggestionEngine::new(Arc::new(SuggestionCatalog::sample())),
        RandomSource::seeded(7),
        SuggestionConfig::default(),
    )
}

/// Send one request through the router, returning status and parsed JSON
/// (Null for empty bodies)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Create a content item through the API and return its JSON
pub async fn create_item(state: &ContentState, title: &str) -> serde_json::Value {
    let app = cs_server::build_content_router(state.clone());
    let (status, json) = send(
        app,
        "POST",
        "/content/",
        Some(serde_json::json!({
            "title": title,
            "description": "A description",
            "body": "Some body text",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json
}
