use cs_core::ContentItem;

use chrono::SecondsFormat;
use serde::Serialize;

/// Content item DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ContentItemDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub body: String,
    /// RFC 3339, microsecond precision
    pub created_at: String,
    pub updated_at: String,
}

impl From<ContentItem> for ContentItemDto {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            body: item.body,
            created_at: item.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            updated_at: item.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
