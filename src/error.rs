//! Error types for the card catalog
//!
//! This module defines the error types used throughout the catalog service.
//! The main error type is `CatalogError`. A missing card is not an error:
//! lookups return `Option` and the api facades turn absence into a 404.

use thiserror::Error;

/// Main error type for the card catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    /// The card store could not complete a query
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not supported
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Result type alias for operations that can fail with a [CatalogError]
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a new storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        CatalogError::StorageError(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        CatalogError::InvalidInput(msg.into())
    }

    /// Create a new not supported error
    pub fn not_supported<S: Into<String>>(what: S) -> Self {
        CatalogError::NotSupported(what.into())
    }
}
