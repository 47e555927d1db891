use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT,
    MIN_SUGGESTION_LIMIT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Limit used when the request omits one
    pub default_limit: usize,
    /// Largest limit a request may ask for
    pub max_limit: usize,
    /// Fixed seed for reproducible picks; None = fresh entropy
    pub seed: Option<u64>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SUGGESTION_LIMIT,
            max_limit: MAX_SUGGESTION_LIMIT,
            seed: None,
        }
    }
}

impl SuggestionConfig {
    /// Smallest limit a request may ask for
    pub fn min_limit(&self) -> usize {
        MIN_SUGGESTION_LIMIT
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_limit < MIN_SUGGESTION_LIMIT || self.max_limit > MAX_SUGGESTION_LIMIT {
            return Err(ConfigError::invalid(
                ConfigSection::Suggestions,
                format!(
                    "suggestions.max_limit must be {}-{}, got {}",
                    MIN_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT, self.max_limit
                ),
            ));
        }

        if self.default_limit < MIN_SUGGESTION_LIMIT || self.default_limit > self.max_limit {
            return Err(ConfigError::invalid(
                ConfigSection::Suggestions,
                format!(
                    "suggestions.default_limit must be {}-{}, got {}",
                    MIN_SUGGESTION_LIMIT, self.max_limit, self.default_limit
                ),
            ));
        }

        Ok(())
    }
}
