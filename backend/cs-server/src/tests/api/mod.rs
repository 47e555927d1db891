mod content_item_dto;
mod error;
