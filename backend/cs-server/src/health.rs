use crate::{ContentState, SuggestionState};

use cs_db::ContentItemRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health on the content service - status including a store round trip
pub async fn content_health(State(state): State<ContentState>) -> Response {
    let repo = ContentItemRepository::new(state.pool.clone());

    let (status, database, content_items) = match repo.count().await {
        Ok(count) => (StatusCode::OK, "operational", Some(count)),
        Err(e) => {
            log::error!("Health check failed to reach the content store: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", None)
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "service": "content",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "content_items": content_items,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /health on the suggestion service
pub async fn suggestion_health(State(state): State<SuggestionState>) -> Response {
    let catalog = state.engine.catalog();

    let health = json!({
        "status": "healthy",
        "service": "suggestion",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": {
            "items": catalog.len(),
            "categories": catalog.categories(),
        },
        "seeded": state.random.is_seeded(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness check (is the process alive?)
pub async fn liveness() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness check for the content service
pub async fn content_readiness(State(state): State<ContentState>) -> Response {
    let repo = ContentItemRepository::new(state.pool.clone());

    match repo.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
