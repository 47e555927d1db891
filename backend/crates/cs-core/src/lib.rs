pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::content_item::ContentItem;
pub use models::content_item_patch::ContentItemPatch;
pub use models::new_content_item::NewContentItem;
pub use models::patch::Patch;
pub use models::validation::validate_required_text;
