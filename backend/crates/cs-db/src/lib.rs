pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{create_pool, is_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::content_item_repository::ContentItemRepository;
