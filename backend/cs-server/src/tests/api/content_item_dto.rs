use crate::ContentItemDto;

use cs_core::ContentItem;

use chrono::{TimeZone, Utc};

#[test]
fn test_timestamps_render_as_rfc3339_utc_micros() {
    let created_at = Utc.timestamp_micros(1_767_225_600_000_001).unwrap();
    let item = ContentItem {
        id: 1,
        title: "A".into(),
        description: None,
        body: "B".into(),
        created_at,
        updated_at: created_at,
    };

    let dto = ContentItemDto::from(item);

    assert_eq!(dto.created_at, "2026-01-01T00:00:00.000001Z");
    assert_eq!(dto.updated_at, dto.created_at);
}

#[test]
fn test_absent_description_serializes_as_null() {
    let now = Utc::now();
    let dto = ContentItemDto::from(ContentItem {
        id: 3,
        title: "A".into(),
        description: None,
        body: "B".into(),
        created_at: now,
        updated_at: now,
    });

    let json = serde_json::to_value(&dto).unwrap();

    assert!(json["description"].is_null());
    assert_eq!(json["id"], 3);
}
