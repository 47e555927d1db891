//! Content REST API handlers

use crate::{ApiError, ApiResult, ContentItemDto, ContentState, CreateContentRequest, ListContentQuery};

use cs_core::{ContentItemPatch, NewContentItem};
use cs_db::ContentItemRepository;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /content/
pub async fn create_content(
    State(state): State<ContentState>,
    payload: Result<Json<CreateContentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ContentItemDto>)> {
    let Json(req) = payload?;

    let new_item = NewContentItem::new(req.title, req.description, req.body)?;

    let repo = ContentItemRepository::new(state.pool.clone());
    let item = repo.create(&new_item).await?;

    log::info!("Created content item {} via REST API", item.id);

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// GET /content/{id}
pub async fn get_content(
    State(state): State<ContentState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ContentItemDto>> {
    let id = parse_id(path)?;

    let repo = ContentItemRepository::new(state.pool.clone());
    let item = repo.find_by_id(id).await?;

    Ok(Json(item.into()))
}

/// GET /content/?skip=&limit=
pub async fn list_content(
    State(state): State<ContentState>,
    query: Result<Query<ListContentQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ContentItemDto>>> {
    let Query(query) = query?;

    let repo = ContentItemRepository::new(state.pool.clone());
    let items = repo.list(query.skip, query.limit).await?;

    Ok(Json(items.into_iter().map(ContentItemDto::from).collect()))
}

/// PUT /content/{id}
///
/// Partial update: only fields present in the body are written.
pub async fn update_content(
    State(state): State<ContentState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ContentItemPatch>, JsonRejection>,
) -> ApiResult<Json<ContentItemDto>> {
    let id = parse_id(path)?;
    let Json(patch) = payload?;

    let repo = ContentItemRepository::new(state.pool.clone());
    let item = repo.update(id, &patch).await?;

    log::info!(
        "Updated content item {} via REST API (fields: {})",
        id,
        if patch.is_empty() {
            "none".to_string()
        } else {
            patch.changed_fields().join(", ")
        }
    );

    Ok(Json(item.into()))
}

/// DELETE /content/{id}
pub async fn delete_content(
    State(state): State<ContentState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(path)?;

    let repo = ContentItemRepository::new(state.pool.clone());
    repo.delete(id).await?;

    log::info!("Deleted content item {} via REST API", id);

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    let Path(raw) = path?;

    raw.parse::<i64>().map_err(|_| {
        ApiError::validation(
            format!("Invalid content id '{}': expected an integer", raw),
            Some("id"),
        )
    })
}
