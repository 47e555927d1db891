pub mod content;
pub mod error;
pub mod root;
pub mod suggestions;
