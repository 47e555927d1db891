use serde::{Deserialize, Serialize};

/// One pick returned to the caller. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: i64,
    pub title: String,
    pub recommendation_reason: String,
}
