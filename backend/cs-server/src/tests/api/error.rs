use crate::ApiError;

use cs_core::NewContentItem;
use cs_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Content item 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Content item 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("limit must be between 1 and 10, got 20", Some("limit"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "limit");
}

#[tokio::test]
async fn test_unavailable_returns_503() {
    let error = ApiError::Unavailable {
        message: "Content store is unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_not_found_converts_to_not_found() {
    let api_error: ApiError = DbError::not_found(42).into();

    match api_error {
        ApiError::NotFound { message, .. } => {
            assert_eq!(message, "Content item 42 not found");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_core_validation_converts_to_validation_with_field() {
    let core_error =
        NewContentItem::new(String::new(), None, "Body".into()).expect_err("empty title");

    let api_error: ApiError = DbError::from(core_error).into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_pool_timeout_converts_to_unavailable() {
    let api_error: ApiError = DbError::from(sqlx::Error::PoolTimedOut).into();

    assert_eq!(api_error.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn test_row_not_found_converts_to_internal_without_details() {
    let api_error: ApiError = DbError::from(sqlx::Error::RowNotFound).into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}
