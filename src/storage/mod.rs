// src/storage/mod.rs

//! Read-only access to the card catalog.
//!
//! [`CardStore`] is the only abstraction over persistence. Backends evaluate
//! [`Predicate`]s and [`OrderBy`]s themselves; the query engine never sees how
//! cards are kept.

#[cfg(feature = "memory-storage")]
pub mod memory;
#[cfg(feature = "file-storage")]
pub mod file;

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::config::Config;
use crate::core::{Card, CardField, OrderBy, Predicate};
use crate::error::CatalogError;
use crate::types::StorageType;

#[cfg(feature = "file-storage")]
pub use file::FileStorage;
#[cfg(feature = "memory-storage")]
pub use memory::MemoryStorage;

/// A read-only handle over the catalog.
///
/// `count` and `fetch` called with the same predicate must agree with each
/// other for an unchanged catalog. Implementations signal unavailable storage
/// with [`CatalogError::StorageError`]; an empty result always means nothing
/// matched.
#[async_trait]
pub trait CardStore: Send + Sync + std::fmt::Debug {
    /// Number of cards satisfying `predicate`.
    async fn count(&self, predicate: &Predicate) -> Result<u64, CatalogError>;

    /// Up to `limit` cards satisfying `predicate`, sorted by `order_by`,
    /// after skipping the first `offset` matches.
    async fn fetch(
        &self,
        predicate: &Predicate,
        order_by: OrderBy,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Card>, CatalogError>;

    /// Exact lookup by uuid.
    async fn fetch_by_uuid(&self, uuid: &str) -> Result<Option<Card>, CatalogError>;

    /// Distinct non-empty values of `field`, sorted ascending.
    async fn distinct_values(&self, field: CardField) -> Result<Vec<String>, CatalogError>;
}

#[async_trait]
impl<T: CardStore + ?Sized> CardStore for Box<T> {
    async fn count(&self, predicate: &Predicate) -> Result<u64, CatalogError> {
        (**self).count(predicate).await
    }

    async fn fetch(
        &self,
        predicate: &Predicate,
        order_by: OrderBy,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Card>, CatalogError> {
        (**self).fetch(predicate, order_by, offset, limit).await
    }

    async fn fetch_by_uuid(&self, uuid: &str) -> Result<Option<Card>, CatalogError> {
        (**self).fetch_by_uuid(uuid).await
    }

    async fn distinct_values(&self, field: CardField) -> Result<Vec<String>, CatalogError> {
        (**self).distinct_values(field).await
    }
}

/// Sorts already-filtered cards and cuts out the requested window.
pub(crate) fn order_and_slice(
    mut cards: Vec<Card>,
    order_by: OrderBy,
    offset: u64,
    limit: u64,
) -> Vec<Card> {
    cards.sort_by(|a, b| order_by.compare(a, b));
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    cards.into_iter().skip(offset).take(limit).collect()
}

/// Collects the distinct non-empty values of `field` in ascending order.
pub(crate) fn collect_distinct<'a, I>(cards: I, field: CardField) -> Vec<String>
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(|card| field.value(card))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Opens the card store selected by `config.storage`.
///
/// # Errors
///
/// Returns [`CatalogError::NotSupported`] when the configured backend was not
/// compiled in, or a storage error if the file store cannot be prepared.
pub async fn create_card_store(config: &Config) -> Result<Box<dyn CardStore>, CatalogError> {
    match config.storage.storage_type {
        StorageType::Memory => {
            #[cfg(feature = "memory-storage")]
            {
                log::info!("Using in-memory card store");
                Ok(memory::MemoryStorage::new().boxed())
            }
            #[cfg(not(feature = "memory-storage"))]
            {
                Err(CatalogError::not_supported("memory storage is not enabled in this build"))
            }
        }
        StorageType::File => {
            #[cfg(feature = "file-storage")]
            {
                log::info!("Using file card store at {}", config.storage.base_path);
                Ok(file::FileStorage::new(&config.storage.base_path).await?.boxed())
            }
            #[cfg(not(feature = "file-storage"))]
            {
                Err(CatalogError::not_supported("file storage is not enabled in this build"))
            }
        }
    }
}
