use cs_server::{ContentState, bootstrap, build_content_router};

use std::error::Error;

use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = bootstrap::init("content-server")?;

    info!("Connecting to database");
    let pool = cs_db::create_pool(&config.database.url, config.database.max_connections).await?;

    info!("Running database migrations...");
    cs_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let app = build_content_router(ContentState::new(pool.clone()));

    bootstrap::serve(&config.server.content_bind_addr(), app).await?;

    pool.close().await;
    Ok(())
}
