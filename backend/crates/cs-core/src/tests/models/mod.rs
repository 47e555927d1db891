mod content_item;
mod content_item_patch;
mod new_content_item;
mod patch;
