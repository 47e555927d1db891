use crate::{
    CONFIG_DIR_NAME, ConfigError, ConfigErrorResult, ConfigSection, DatabaseConfig, LoggingConfig,
    ServerConfig, SuggestionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub suggestions: SuggestionConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CS_CONFIG_DIR env var, else use ./.cs/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DATABASE_URL and CS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CS_CONFIG_DIR env var > ./.cs/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("CS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|_| {
            ConfigError::invalid(
                ConfigSection::Environment,
                "Cannot determine current working directory",
            )
        })?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.suggestions.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains("..") || Path::new(file).is_absolute())
        {
            return Err(ConfigError::invalid(
                ConfigSection::Logging,
                "logging.file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary. The database URL is logged without
    /// query parameters.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: host={}, content_port={}, suggestion_port={}",
            self.server.host, self.server.content_port, self.server.suggestion_port
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.url.split('?').next().unwrap_or_default(),
            self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  suggestions: default_limit={}, max_limit={}, seeded={}",
            self.suggestions.default_limit,
            self.suggestions.max_limit,
            self.suggestions.seed.is_some()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CS_CONTENT_PORT", &mut self.server.content_port);
        Self::apply_env_parse("CS_SUGGESTION_PORT", &mut self.server.suggestion_port);

        // Database (DATABASE_URL is the conventional name; CS_DATABASE_URL wins)
        Self::apply_env_string("DATABASE_URL", &mut self.database.url);
        Self::apply_env_string("CS_DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "CS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("CS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CS_LOG_FILE", &mut self.logging.file);

        // Suggestions
        Self::apply_env_parse(
            "CS_SUGGESTION_DEFAULT_LIMIT",
            &mut self.suggestions.default_limit,
        );
        Self::apply_env_parse("CS_SUGGESTION_MAX_LIMIT", &mut self.suggestions.max_limit);
        Self::apply_env_option_parse("CS_SUGGESTION_SEED", &mut self.suggestions.seed);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<parseable> values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
