// src/lib.rs

//! # card-catalog
//!
//! A read-only catalog query service for trading-card records. The crate
//! lists cards page by page, filters them by set code, runs bounded
//! substring searches on card names and enumerates the set codes present
//! in the catalog.
//!
//! The [`query::QueryEngine`] holds all of the decision logic and talks to
//! persistence only through the [`storage::CardStore`] trait. The [`api`]
//! module shapes engine results for a presentation client.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod query;
pub mod storage;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

pub use crate::core::{Card, CardField, OrderBy, Page, Predicate};
pub use crate::error::{CatalogError, Result};
pub use crate::query::QueryEngine;
pub use crate::storage::CardStore;
pub use crate::types::{LogLevel, StorageType};

use crate::config::Config;
use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Loads the configuration and installs the logger.
///
/// The configuration is read from `config_path` when given, otherwise from
/// `./config.toml`. Missing files fall back to defaults. Calling `init` a
/// second time returns the already loaded configuration.
///
/// # Errors
///
/// Returns [`CatalogError::ConfigError`] if the configuration is invalid and
/// [`CatalogError::InvalidInput`] if a logger has already been installed by
/// someone else.
pub fn init(config_path: Option<&str>) -> Result<&'static Config> {
    if let Some(config) = GLOBAL_CONFIG.get() {
        return Ok(config);
    }

    let config = Config::load(config_path.unwrap_or("config.toml"))?;
    init_logging(&config)?;

    Ok(GLOBAL_CONFIG.get_or_init(|| config))
}

/// Returns the configuration installed by [`init`], if any.
pub fn config() -> Option<&'static Config> {
    GLOBAL_CONFIG.get()
}

#[cfg(feature = "logging")]
fn init_logging(config: &Config) -> Result<()> {
    if !config.logging.console {
        return Ok(());
    }
    env_logger::Builder::new()
        .filter_level(config.logging.level.into())
        .parse_default_env()
        .try_init()
        .map_err(|e| CatalogError::invalid_input(format!("Failed to initialize logger: {}", e)))
}

#[cfg(not(feature = "logging"))]
fn init_logging(_config: &Config) -> Result<()> {
    Ok(())
}
