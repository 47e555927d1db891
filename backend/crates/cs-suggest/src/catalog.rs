use crate::CatalogItem;

/// Fixed list of items the engine samples from.
///
/// Built once at startup and shared read-only; there is no mutation API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionCatalog {
    items: Vec<CatalogItem>,
}

impl SuggestionCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The built-in eight item catalog served until a real ranking source exists
    pub fn sample() -> Self {
        Self::new(vec![
            CatalogItem::new(1, "Learn Python Programming", "education"),
            CatalogItem::new(2, "Introduction to FastAPI", "technology"),
            CatalogItem::new(3, "Healthy Cooking Recipes", "lifestyle"),
            CatalogItem::new(4, "Understanding Microservices", "technology"),
            CatalogItem::new(5, "Travel Guide: Paris", "travel"),
            CatalogItem::new(6, "Advanced JavaScript Techniques", "technology"),
            CatalogItem::new(7, "Home Workout Routines", "health"),
            CatalogItem::new(8, "The Art of Digital Painting", "art"),
        ])
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose category equals `category` exactly, in catalog order
    pub fn in_category(&self, category: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.in_category(category))
            .collect()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.items.iter().filter_map(|i| i.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}
