use serde::Deserialize;

const DEFAULT_LIST_LIMIT: i64 = 100;

/// Query parameters for listing content items
#[derive(Debug, Deserialize)]
pub struct ListContentQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}
