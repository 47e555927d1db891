use crate::ContentItem;

use chrono::Utc;

fn sample_item() -> ContentItem {
    let now = Utc::now();
    ContentItem {
        id: 1,
        title: "Title".to_string(),
        description: None,
        body: "Body".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_item_serializes_with_snake_case_timestamps() {
    let item = sample_item();

    let json = serde_json::to_value(&item).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Title");
    assert!(json["description"].is_null());
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());
}
