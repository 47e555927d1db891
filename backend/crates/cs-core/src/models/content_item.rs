//! Content item entity - a persisted piece of publishable content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored content record.
///
/// `id` is assigned by the store and never reused. `updated_at` is refreshed
/// on every successful mutation and never falls behind `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub body: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
