// src/api/sync_api.rs

use crate::api::async_api;
use crate::api::{ApiResult, CardView, ListParams, PageView, SearchParams};
use crate::config::Config;
use crate::error::Result;
use crate::query::QueryEngine;
use crate::storage::{create_card_store, CardStore};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Provides a blocking API over the card catalog.
///
/// Owns a Tokio runtime and blocks the calling thread on every operation.
/// Must not be used from inside another async runtime.
#[derive(Debug)]
pub struct Catalog {
    inner: async_api::Catalog<dyn CardStore>,
    rt: Runtime,
}

impl Catalog {
    /// Opens the card store selected by `config` and wraps it.
    ///
    /// # Errors
    /// Returns an error if a Tokio runtime cannot be created or if the card
    /// store cannot be opened.
    pub fn new(config: &Config) -> Result<Self> {
        let rt = Runtime::new()?;

        let store = rt.block_on(create_card_store(config))?;
        Ok(Self::with_store(Arc::from(store), config, rt))
    }

    /// Wraps an already opened store.
    ///
    /// # Errors
    /// Returns an error if a Tokio runtime cannot be created.
    pub fn from_store(store: Arc<dyn CardStore>, config: &Config) -> Result<Self> {
        let rt = Runtime::new()?;
        Ok(Self::with_store(store, config, rt))
    }

    fn with_store(store: Arc<dyn CardStore>, config: &Config, rt: Runtime) -> Self {
        let engine = QueryEngine::new(store, Arc::new(config.clone()));
        Self { inner: async_api::Catalog::new(engine), rt }
    }

    /// Blocking [`async_api::Catalog::list_cards`].
    pub fn list_cards(&self, params: &ListParams) -> ApiResult<PageView> {
        self.rt.block_on(self.inner.list_cards(params))
    }

    /// Blocking [`async_api::Catalog::search_cards`].
    pub fn search_cards(&self, params: &SearchParams) -> ApiResult<Vec<CardView>> {
        self.rt.block_on(self.inner.search_cards(params))
    }

    /// Blocking [`async_api::Catalog::list_set_codes`].
    pub fn list_set_codes(&self) -> ApiResult<Vec<String>> {
        self.rt.block_on(self.inner.list_set_codes())
    }

    /// Blocking [`async_api::Catalog::show_card`].
    pub fn show_card(&self, uuid: &str) -> ApiResult<CardView> {
        self.rt.block_on(self.inner.show_card(uuid))
    }

    /// Every card uuid in the catalog, ascending.
    pub fn list_card_uuids(&self) -> Result<Vec<String>> {
        self.rt.block_on(self.inner.engine().list_card_uuids())
    }
}
