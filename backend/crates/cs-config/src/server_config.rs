use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_CONTENT_PORT, DEFAULT_HOST,
    DEFAULT_SUGGESTION_PORT, MIN_PORT,
};

use serde::Deserialize;

/// Listen addresses for both services. They share a host and differ by port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub content_port: u16,
    pub suggestion_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            content_port: DEFAULT_CONTENT_PORT,
            suggestion_port: DEFAULT_SUGGESTION_PORT,
        }
    }
}

impl ServerConfig {
    pub fn content_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.content_port)
    }

    pub fn suggestion_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.suggestion_port)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                "server.host cannot be empty",
            ));
        }

        Self::validate_port("server.content_port", self.content_port)?;
        Self::validate_port("server.suggestion_port", self.suggestion_port)?;

        if self.content_port != 0 && self.content_port == self.suggestion_port {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                format!(
                    "server.content_port and server.suggestion_port must differ, both are {}",
                    self.content_port
                ),
            ));
        }

        Ok(())
    }

    // Port 0 means "auto-assign" - OS picks an available port.
    // Any other port must be >= MIN_PORT (1024).
    #[track_caller]
    fn validate_port(name: &str, port: u16) -> ConfigErrorResult<()> {
        if port != 0 && port < MIN_PORT {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                format!(
                    "{} must be 0 (auto) or >= {}, got {}",
                    name, MIN_PORT, port
                ),
            ));
        }

        Ok(())
    }
}
