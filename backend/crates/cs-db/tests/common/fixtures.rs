use cs_core::{ContentItemPatch, NewContentItem, Patch};

/// Creates a valid NewContentItem with sensible defaults
pub fn create_test_item() -> NewContentItem {
    create_test_item_titled("Test Title")
}

/// Creates a valid NewContentItem with the given title
pub fn create_test_item_titled(title: &str) -> NewContentItem {
    NewContentItem::new(
        title.to_string(),
        Some("Test description".to_string()),
        "Test body".to_string(),
    )
    .expect("fixture must be valid")
}

/// Patch that only sets the title
pub fn title_patch(title: &str) -> ContentItemPatch {
    ContentItemPatch {
        title: Patch::Value(title.to_string()),
        ..ContentItemPatch::default()
    }
}
