use crate::{CatalogItem, Suggestion, SuggestionCatalog};

use std::sync::Arc;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Reasons that do not depend on the picked item
pub const STATIC_REASONS: [&str; 4] = [
    "Based on popular trends.",
    "You might also like this.",
    "Recommended for you.",
    "Others also viewed this.",
];

/// The full reason pool for one item: the static phrases plus a category pick.
pub fn reasons_for(item: &CatalogItem) -> Vec<String> {
    let mut reasons: Vec<String> = STATIC_REASONS.iter().map(|r| r.to_string()).collect();
    reasons.push(format!("A top pick in '{}'.", item.category_or_default()));
    reasons
}

/// Draws suggestions from a shared, immutable catalog.
///
/// Randomness is supplied by the caller so results can be reproduced with a
/// seeded generator.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Arc<SuggestionCatalog>,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<SuggestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SuggestionCatalog {
        &self.catalog
    }

    /// Items eligible for sampling.
    ///
    /// A category with no matches falls back to the whole catalog rather
    /// than producing an empty set.
    pub fn candidates(&self, category: Option<&str>) -> Vec<&CatalogItem> {
        if let Some(category) = category {
            let matching = self.catalog.in_category(category);
            if !matching.is_empty() {
                return matching;
            }
            debug!(
                "No catalog items in category '{}', sampling from full catalog",
                category
            );
        }

        self.catalog.items().iter().collect()
    }

    /// Pick up to `limit` distinct items, in draw order, each with a reason.
    pub fn recommend<R>(&self, category: Option<&str>, limit: usize, rng: &mut R) -> Vec<Suggestion>
    where
        R: Rng + ?Sized,
    {
        let mut candidates = self.candidates(category);

        let num_to_sample = limit.min(candidates.len());
        if num_to_sample == 0 {
            return Vec::new();
        }

        let (picked, _) = candidates.partial_shuffle(rng, num_to_sample);

        picked
            .iter()
            .map(|item| Suggestion {
                id: item.id,
                title: item.title.clone(),
                recommendation_reason: choose_reason(item, rng),
            })
            .collect()
    }
}

fn choose_reason<R>(item: &CatalogItem, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let mut reasons = reasons_for(item);
    let index = rng.random_range(0..reasons.len());
    reasons.swap_remove(index)
}
