use crate::{
    ContentState, SuggestionState, content_root, create_content, delete_content, get_content,
    get_suggestions, health, list_content, suggestion_root, update_content,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the content service router
pub fn build_content_router(state: ContentState) -> Router {
    Router::new()
        .route("/", get(content_root))
        // Collection, with and without the trailing slash
        .route("/content", get(list_content).post(create_content))
        .route("/content/", get(list_content).post(create_content))
        .route(
            "/content/{id}",
            get(get_content).put(update_content).delete(delete_content),
        )
        // Health check endpoints
        .route("/health", get(health::content_health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::content_readiness))
        .with_state(state)
        .layer(cors())
}

/// Build the suggestion service router
pub fn build_suggestion_router(state: SuggestionState) -> Router {
    Router::new()
        .route("/", get(suggestion_root))
        .route("/suggestions", get(get_suggestions))
        .route("/suggestions/", get(get_suggestions))
        // Health check endpoints
        .route("/health", get(health::suggestion_health))
        .route("/live", get(health::liveness))
        .with_state(state)
        .layer(cors())
}

/// Browser frontends call both services from another origin
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
