mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod suggestion_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use suggestion_config::SuggestionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_CONTENT_PORT: u16 = 8002;
const DEFAULT_SUGGESTION_PORT: u16 = 8003;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_URL: &str = "sqlite://content.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_SUGGESTION_LIMIT: usize = 3;
const MIN_SUGGESTION_LIMIT: usize = 1;
const MAX_SUGGESTION_LIMIT: usize = 10;

/// Directory name used when CS_CONFIG_DIR is unset
pub const CONFIG_DIR_NAME: &str = ".cs";
