//! Configuration management for the card catalog
//!
//! This module handles loading, validating, and providing access to the
//! service configuration. Values come from a TOML file, are overridden by
//! `CARD_CATALOG_*` environment variables and fall back to built-in defaults.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod validation;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/config_mod_tests.rs"]
mod config_mod_tests;

use std::{
    env,
    fs,
    path::{Path, PathBuf},
};
use directories::ProjectDirs;

use serde::{Deserialize, Serialize};

use crate::{LogLevel, StorageType};

/// Re-export the error type
pub use error::ConfigError;

/// The environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CARD_CATALOG_";

/// The application name used for finding config directories
const APP_NAME: &str = "card-catalog";

/// Cards per page served by a paginated listing.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Maximum number of cards returned by a search.
pub const DEFAULT_SEARCH_LIMIT: u64 = 20;

/// Shortest name, in characters, that triggers a substring search. Shorter
/// terms match too much of the catalog to be useful as suggestions.
pub const MIN_SEARCH_LENGTH: usize = 3;

/// Main configuration structure for the card catalog.
///
/// # Example
///
/// ```no_run
/// use card_catalog::config::Config;
///
/// // A path that does not exist yields the defaults.
/// let config = Config::load("path/that/does/not/exist.toml").unwrap();
/// assert_eq!(config.query.page_size, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Query tunables
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage type
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    /// Base path for file storage (ignored for memory storage)
    pub base_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::File,
            base_path: "./data".to_string(),
        }
    }
}

/// Limits and ordering rules applied by the query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Cards per page for `list_cards`.
    pub page_size: u64,
    /// Hard cap on `search_cards` results.
    pub search_limit: u64,
    /// Minimum name length, in characters, for a name search.
    pub min_search_length: usize,
    /// Sort set-filtered listings and set-only searches by name. When off,
    /// those paths return cards in the store's natural order.
    pub sort_set_listings: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_limit: DEFAULT_SEARCH_LIMIT,
            min_search_length: MIN_SEARCH_LENGTH,
            sort_set_listings: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Whether to log to console
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
        }
    }
}

impl Config {
    /// Loads the configuration from the specified path.
    ///
    /// The configuration is resolved in the following order:
    /// 1. From the file at `path`, or the built-in defaults if it does not exist
    /// 2. Environment variables with the `CARD_CATALOG_` prefix
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, if an
    /// environment override cannot be parsed, or if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config = match fs::read_to_string(path) {
            Ok(config_str) => toml::from_str::<Config>(&config_str)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Config file not found at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::error!("Failed to read config file {}: {}", path.display(), e);
                return Err(ConfigError::Io(e));
            }
        };

        config.apply_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Variables are prefixed with `CARD_CATALOG_` and name the section and
    /// field joined by `_`, e.g. `CARD_CATALOG_QUERY_PAGE_SIZE=50`.
    ///
    /// # Errors
    ///
    /// Returns an error if any recognised variable cannot be parsed.
    pub fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in env::vars() {
            let Some(stripped) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match stripped.to_lowercase().as_str() {
                "logging_level" => {
                    self.logging.level = value.parse().map_err(|_| {
                        ConfigError::invalid_value("logging.level", value, "Invalid log level")
                    })?;
                }
                "storage_type" => {
                    self.storage.storage_type = value.parse().map_err(|_| {
                        ConfigError::invalid_value("storage.type", value, "Expected 'memory' or 'file'")
                    })?;
                }
                "storage_base_path" => {
                    self.storage.base_path = value.to_string();
                }
                "query_page_size" => {
                    self.query.page_size = parse_env("query.page_size", value)?;
                }
                "query_search_limit" => {
                    self.query.search_limit = parse_env("query.search_limit", value)?;
                }
                "query_min_search_length" => {
                    self.query.min_search_length = parse_env("query.min_search_length", value)?;
                }
                "query_sort_set_listings" => {
                    self.query.sort_set_listings = parse_env("query.sort_set_listings", value)?;
                }
                other => {
                    log::debug!("Ignoring unknown configuration override {}{}", ENV_PREFIX, other.to_uppercase());
                }
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Returns the path to the directory where configuration files should be stored.
    ///
    /// This is OS-specific:
    /// - Linux: `$HOME/.config/card-catalog`
    /// - macOS: `$HOME/Library/Application Support/org.cardcatalog.card-catalog`
    /// - Windows: `%APPDATA%\\cardcatalog\\card-catalog`
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "cardcatalog", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

fn parse_env<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::invalid_value(field, value, "Could not parse environment override"))
}
