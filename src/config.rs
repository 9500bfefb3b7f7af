//! Configuration management with validation and defaults
//!
//! Defaults match the original deployment: deckofcardsapi.com as the
//! provider, six-pack shoes, three draw attempts 200ms apart.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigurationError;

/// Top-level server configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwentyOneConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub table: TableConfig,
}

/// HTTP listener configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: vec!["*".to_string()],
            request_timeout_secs: 30,
        }
    }
}

/// Card-deck provider configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the deck-of-cards API, without a trailing slash
    pub base_url: String,
    pub http_timeout_secs: u64,
    /// Attempts per single-card draw (deck creation is never retried)
    pub draw_attempts: u32,
    /// Fixed pause between draw attempts, in milliseconds
    pub draw_backoff_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://deckofcardsapi.com/api".to_string(),
            http_timeout_secs: 10,
            draw_attempts: 3,
            draw_backoff_ms: 200,
        }
    }
}

impl ProviderConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn draw_backoff(&self) -> Duration {
        Duration::from_millis(self.draw_backoff_ms)
    }
}

/// Table rules configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of 52-card packs shuffled into the shoe
    pub deck_count: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { deck_count: 6 }
    }
}

impl TableConfig {
    /// Remaining-card threshold below which a fresh shoe is due.
    /// Carried in every game's state; resolution logic does not act on
    /// it yet.
    pub fn shuffle_at(&self) -> i64 {
        52 * i64::from(self.deck_count) - 75
    }
}

impl TwentyOneConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigurationError::LoadFailed(e.to_string()))?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigurationError::LoadFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for logical consistency
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.provider.base_url.is_empty() {
            return Err(ConfigurationError::InvalidValue(
                "provider.base_url must not be empty".to_string(),
            ));
        }
        if self.provider.base_url.ends_with('/') {
            return Err(ConfigurationError::InvalidValue(
                "provider.base_url must not end with a slash".to_string(),
            ));
        }
        if self.provider.draw_attempts == 0 {
            return Err(ConfigurationError::InvalidValue(
                "provider.draw_attempts must be > 0".to_string(),
            ));
        }
        if self.table.deck_count == 0 {
            return Err(ConfigurationError::InvalidValue(
                "table.deck_count must be > 0".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigurationError::InvalidValue(
                "server.request_timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TwentyOneConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_original_deployment() {
        let config = TwentyOneConfig::default();
        assert_eq!(config.table.deck_count, 6);
        assert_eq!(config.provider.draw_attempts, 3);
        assert_eq!(config.provider.draw_backoff(), Duration::from_millis(200));
    }

    #[test]
    fn test_shuffle_threshold() {
        assert_eq!(TableConfig { deck_count: 6 }.shuffle_at(), 237);
        assert_eq!(TableConfig { deck_count: 1 }.shuffle_at(), -23);
    }

    #[test]
    fn test_invalid_config_validation() {
        let mut config = TwentyOneConfig::default();
        config.table.deck_count = 0;
        assert!(config.validate().is_err());

        let mut config = TwentyOneConfig::default();
        config.provider.draw_attempts = 0;
        assert!(config.validate().is_err());

        let mut config = TwentyOneConfig::default();
        config.provider.base_url = "https://deckofcardsapi.com/api/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TwentyOneConfig = toml::from_str(
            r#"
            [table]
            deck_count = 2

            [provider]
            draw_backoff_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.table.deck_count, 2);
        assert_eq!(config.provider.draw_backoff_ms, 50);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.draw_attempts, 3);
    }
}
