use serde::Deserialize;

/// Query parameters for GET /suggestions/
#[derive(Debug, Default, Deserialize)]
pub struct SuggestionQuery {
    /// Optional category filter; empty is treated as absent
    #[serde(default)]
    pub category: Option<String>,
    /// Number of suggestions; defaults from config when absent
    #[serde(default)]
    pub limit: Option<i64>,
}

impl SuggestionQuery {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
