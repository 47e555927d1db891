use crate::Result as DbErrorResult;

use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// True for URLs that open a private in-memory database per connection
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a SQLite pool for `url`, creating the database file if missing.
///
/// In-memory databases are capped at one connection; every extra connection
/// would open its own empty database.
pub async fn create_pool(url: &str, max_connections: u32) -> DbErrorResult<SqlitePool> {
    let in_memory = is_in_memory(url);

    let mut options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    if !in_memory {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let mut pool_options = SqlitePoolOptions::new();
    let max_connections = if in_memory {
        // Dropping the only connection would drop the database with it.
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        1
    } else {
        max_connections
    };

    let pool = pool_options
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(
        "Database pool ready (max {} connection{})",
        max_connections,
        if max_connections == 1 { "" } else { "s" }
    );

    Ok(pool)
}

/// Apply the embedded migrations (creates `content_items` if needed)
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
