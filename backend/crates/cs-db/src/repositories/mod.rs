pub mod content_item_repository;
