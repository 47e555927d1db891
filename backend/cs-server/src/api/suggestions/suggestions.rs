//! Suggestion REST API handler

use crate::{ApiError, ApiResult, SuggestionQuery, SuggestionState};

use cs_suggest::Suggestion;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /suggestions/?category=&limit=
pub async fn get_suggestions(
    State(state): State<SuggestionState>,
    query: Result<Query<SuggestionQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Suggestion>>> {
    let Query(query) = query?;

    let limit = resolve_limit(&state, query.limit)?;
    let category = query.category();

    let suggestions = state
        .random
        .with_rng(|rng| state.engine.recommend(category, limit, rng));

    log::debug!(
        "Served {} suggestion(s) (category: {}, limit: {})",
        suggestions.len(),
        category.unwrap_or("any"),
        limit
    );

    Ok(Json(suggestions))
}

/// Apply the default and enforce `min_limit..=max_limit`
fn resolve_limit(state: &SuggestionState, requested: Option<i64>) -> ApiResult<usize> {
    let min = state.limits.min_limit();
    let max = state.limits.max_limit;

    let Some(requested) = requested else {
        return Ok(state.limits.default_limit);
    };

    match usize::try_from(requested) {
        Ok(limit) if (min..=max).contains(&limit) => Ok(limit),
        _ => Err(ApiError::validation(
            format!(
                "limit must be between {} and {}, got {}",
                min, max, requested
            ),
            Some("limit"),
        )),
    }
}
