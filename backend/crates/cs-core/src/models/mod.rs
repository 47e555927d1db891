pub mod content_item;
pub mod content_item_patch;
pub mod new_content_item;
pub mod patch;
pub mod validation;
