//! Configuration validation for the card catalog
//!
//! Checks that every configured value is in range before the service starts
//! answering queries.

use std::path::Path;

use super::error::ConfigError;
use super::{Config, LoggingConfig, QueryConfig, StorageConfig};
use crate::{LogLevel, StorageType};

/// Upper bound for `page_size` and `search_limit`.
pub const MAX_RESULT_WINDOW: u64 = 1000;

/// Validates the service configuration.
///
/// # Errors
///
/// Returns a `ConfigError` describing the first check that fails.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_storage_config(&config.storage)?;
    validate_query_config(&config.query)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates the storage configuration.
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if let StorageType::File = config.storage_type {
        if config.base_path.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "storage.base_path",
                "",
                "Base path cannot be empty for file storage"
            ));
        }

        let base_path = Path::new(&config.base_path);
        match std::fs::metadata(base_path) {
            Ok(metadata) => {
                if !metadata.is_dir() {
                    return Err(ConfigError::invalid_value(
                        "storage.base_path",
                        base_path.display(),
                        "Base path must be a directory"
                    ));
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Created on first open.
                log::info!("Card directory {} does not exist yet", base_path.display());
            }
            Err(e) => {
                return Err(ConfigError::invalid_value(
                    "storage.base_path",
                    base_path.display(),
                    format!("Error accessing path: {}", e)
                ));
            }
        }
    }

    Ok(())
}

/// Validates the query limits.
fn validate_query_config(config: &QueryConfig) -> Result<(), ConfigError> {
    check_window("query.page_size", config.page_size)?;
    check_window("query.search_limit", config.search_limit)?;

    if config.min_search_length == 0 {
        return Err(ConfigError::invalid_value(
            "query.min_search_length",
            config.min_search_length,
            "Minimum search length must be at least 1"
        ));
    }

    if config.min_search_length < super::MIN_SEARCH_LENGTH {
        log::warn!(
            "query.min_search_length is {}; short search terms can scan most of the catalog.",
            config.min_search_length
        );
    }

    Ok(())
}

fn check_window(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_RESULT_WINDOW {
        return Err(ConfigError::invalid_value(
            field,
            value,
            format!("Must be between 1 and {}", MAX_RESULT_WINDOW)
        ));
    }
    Ok(())
}

/// Validates the logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if !config.console && config.level != LogLevel::Off {
        log::warn!("Console logging is disabled. No logs will be captured.");
    }
    Ok(())
}
