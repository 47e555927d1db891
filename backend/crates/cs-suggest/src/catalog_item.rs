use crate::DEFAULT_CATEGORY;

/// A read-only entry in the suggestion catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
}

impl CatalogItem {
    pub fn new(id: i64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: Some(category.into()),
        }
    }

    /// An item without a category
    pub fn uncategorized(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: None,
        }
    }

    /// Case-sensitive exact match on the category
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}
