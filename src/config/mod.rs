//! Configuration loading and validation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database URL, e.g. `sqlite:./data/tournament.db`
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_url() -> String {
    "sqlite:./data/tournament.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "Database URL must not be empty".to_string(),
            ));
        }

        if !self.database_url.starts_with("sqlite:") {
            return Err(ConfigError::ValidationError(format!(
                "Unsupported database URL: {}",
                self.database_url
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.database_url, "sqlite:./data/tournament.db");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_url() {
        let mut config = AppConfig::default();
        config.database_url = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_unsupported_url() {
        let mut config = AppConfig::default();
        config.database_url = "postgres://localhost/tournament".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.database_url, parsed.database_url);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let parsed: AppConfig = toml::from_str("log_level = \"debug\"").unwrap();

        assert_eq!(parsed.log_level, "debug");
        assert_eq!(parsed.database_url, "sqlite:./data/tournament.db");
    }
}
