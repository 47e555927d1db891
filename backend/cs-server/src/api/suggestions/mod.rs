pub mod suggestion_query;
pub mod suggestions;
