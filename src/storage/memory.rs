// src/storage/memory.rs

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{Card, CardField, OrderBy, Predicate};
use crate::error::CatalogError;
use crate::storage::{order_and_slice, CardStore};

/// An in-memory card store.
///
/// Cards live in a `DashMap` keyed by uuid, so any number of queries can
/// read concurrently without a global lock. Clones share the same map.
///
/// The store can be told to fail every query (`set_fail_on_query`) so that
/// error propagation through the query engine can be exercised in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cards: Arc<DashMap<String, Card>>,
    fail_on_query: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Creates a new, empty `MemoryStorage` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `cards`. Later duplicates of a uuid win.
    pub fn with_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let storage = Self::new();
        for card in cards {
            storage.insert_card(card);
        }
        storage
    }

    /// Seeds a single card, replacing any card with the same uuid.
    ///
    /// This is a fixture loader; the catalog service itself never writes.
    pub fn insert_card(&self, card: Card) {
        self.cards.insert(card.uuid.clone(), card);
    }

    /// Makes every subsequent query fail with a storage error.
    pub fn set_fail_on_query(&self) {
        self.fail_on_query.store(true, Ordering::SeqCst);
    }

    /// Clears a failure set by `set_fail_on_query`.
    pub fn clear_fail_on_query(&self) {
        self.fail_on_query.store(false, Ordering::SeqCst);
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the storage contains no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards from the storage.
    pub fn clear(&self) {
        self.cards.clear();
    }

    /// Helper to create a boxed version of `MemoryStorage`.
    pub fn boxed(self) -> Box<dyn CardStore> {
        Box::new(self)
    }

    fn check_available(&self) -> Result<(), CatalogError> {
        if self.fail_on_query.load(Ordering::SeqCst) {
            return Err(CatalogError::storage("Simulated MemoryStorage read failure"));
        }
        Ok(())
    }

    fn matching(&self, predicate: &Predicate) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|entry| predicate.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl CardStore for MemoryStorage {
    async fn count(&self, predicate: &Predicate) -> Result<u64, CatalogError> {
        self.check_available()?;
        let count = self
            .cards
            .iter()
            .filter(|entry| predicate.matches(entry.value()))
            .count();
        Ok(count as u64)
    }

    async fn fetch(
        &self,
        predicate: &Predicate,
        order_by: OrderBy,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Card>, CatalogError> {
        self.check_available()?;
        Ok(order_and_slice(self.matching(predicate), order_by, offset, limit))
    }

    async fn fetch_by_uuid(&self, uuid: &str) -> Result<Option<Card>, CatalogError> {
        self.check_available()?;
        Ok(self.cards.get(uuid).map(|entry| entry.value().clone()))
    }

    async fn distinct_values(&self, field: CardField) -> Result<Vec<String>, CatalogError> {
        self.check_available()?;
        let values: BTreeSet<String> = self
            .cards
            .iter()
            .map(|entry| field.value(entry.value()).to_owned())
            .filter(|value| !value.is_empty())
            .collect();
        Ok(values.into_iter().collect())
    }
}
