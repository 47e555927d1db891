pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    content::{
        content::{create_content, delete_content, get_content, list_content, update_content},
        content_item_dto::ContentItemDto,
        create_content_request::CreateContentRequest,
        list_content_query::ListContentQuery,
    },
    error::ApiError,
    error::Result as ApiResult,
    root::{content_root, suggestion_root},
    suggestions::{suggestion_query::SuggestionQuery, suggestions::get_suggestions},
};
pub use app_state::{ContentState, SuggestionState};
pub use error::{Result as ServerResult, ServerError};
pub use routes::{build_content_router, build_suggestion_router};
