pub mod content;
pub mod content_item_dto;
pub mod create_content_request;
pub mod list_content_query;
