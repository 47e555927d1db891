use cs_server::{SuggestionState, bootstrap, build_suggestion_router};
use cs_suggest::{RandomSource, SuggestionCatalog, SuggestionEngine};

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = bootstrap::init("suggestion-server")?;

    let catalog = SuggestionCatalog::sample();
    info!(
        "Suggestion catalog loaded: {} items in {} categories",
        catalog.len(),
        catalog.categories().len()
    );

    let random = RandomSource::from_seed(config.suggestions.seed);
    if random.is_seeded() {
        warn!("Suggestions use a fixed seed; picks are reproducible");
    }

    let state = SuggestionState::new(
        SuggestionEngine::new(Arc::new(catalog)),
        random,
        config.suggestions.clone(),
    );

    bootstrap::serve(
        &config.server.suggestion_bind_addr(),
        build_suggestion_router(state),
    )
    .await?;

    Ok(())
}
