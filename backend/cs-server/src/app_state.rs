use cs_config::SuggestionConfig;
use cs_suggest::{RandomSource, SuggestionEngine};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for the content service
#[derive(Clone)]
pub struct ContentState {
    pub pool: SqlitePool,
}

impl ContentState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Shared state for the suggestion service
#[derive(Clone)]
pub struct SuggestionState {
    pub engine: Arc<SuggestionEngine>,
    pub random: RandomSource,
    pub limits: SuggestionConfig,
}

impl SuggestionState {
    pub fn new(engine: SuggestionEngine, random: RandomSource, limits: SuggestionConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            random,
            limits,
        }
    }
}
