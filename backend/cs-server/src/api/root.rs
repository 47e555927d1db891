use axum::Json;
use serde_json::{Value, json};

/// GET / on the content service
pub async fn content_root() -> Json<Value> {
    Json(json!({ "message": "Content Service is running" }))
}

/// GET / on the suggestion service
pub async fn suggestion_root() -> Json<Value> {
    Json(json!({ "message": "Suggestion Service is running. Try /suggestions/ endpoint." }))
}
