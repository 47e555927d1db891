//! In-memory suggestion catalog and the sampling engine that draws from it.
//!
//! Nothing here performs I/O or fails: an empty catalog produces an empty
//! result and an unmatched category widens to the whole catalog.

pub mod catalog;
pub mod catalog_item;
pub mod engine;
pub mod random_source;
pub mod suggestion;


pub use catalog::SuggestionCatalog;
pub use catalog_item::CatalogItem;
pub use engine::{STATIC_REASONS, SuggestionEngine, reasons_for};
pub use random_source::RandomSource;
pub use suggestion::Suggestion;

/// Category name used in reasons when an item has none
pub const DEFAULT_CATEGORY: &str = "general";
