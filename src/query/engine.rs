// src/query/engine.rs
use crate::config::Config;
use crate::core::{Card, CardField, OrderBy, Page, Predicate};
use crate::error::Result;
use crate::query::types::{clamp_page, non_empty, page_offset, SearchPlan};
use crate::storage::CardStore;

use std::sync::Arc;

/// Executes catalog operations against a [`CardStore`].
///
/// The engine holds no mutable state. Clones share the store handle, so one
/// engine can serve any number of concurrent requests.
#[derive(Debug)]
pub struct QueryEngine<S: CardStore + ?Sized + 'static> {
    store: Arc<S>,
    config: Arc<Config>,
}

impl<S: CardStore + ?Sized + 'static> Clone for QueryEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: CardStore + ?Sized + 'static> QueryEngine<S> {
    /// Creates an engine over `store`. Limits and ordering come from
    /// `config.query`.
    pub fn new(store: Arc<S>, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    /// One page of the catalog, optionally restricted to `set_code`.
    ///
    /// Without a set the catalog is ordered by name. With a set the order
    /// follows `query.sort_set_listings`. `page` below 1 is served as page 1.
    pub async fn list_cards(&self, page: i64, set_code: Option<&str>) -> Result<Page<Card>> {
        log::info!("Listing cards with pagination (page {}, set {:?})", page, set_code);
        let query = &self.config.query;
        let page = clamp_page(page);

        let (predicate, order_by) = match non_empty(set_code) {
            None => (Predicate::MatchAll, OrderBy::Name),
            Some(code) => (Predicate::set_equals(code), self.set_listing_order()),
        };
        let offset = page_offset(page, query.page_size);
        log::debug!("[QueryEngine] list {} order {:?} offset {} limit {}", predicate, order_by, offset, query.page_size);

        let result = futures::try_join!(
            self.store.fetch(&predicate, order_by, offset, query.page_size),
            self.store.count(&predicate),
        );
        let (items, total) = logged("listing cards", result)?;

        Ok(Page::new(items, total, page, query.page_size))
    }

    /// Up to `query.search_limit` cards for a quick-suggestion lookup.
    ///
    /// See [`SearchPlan::new`] for when a search actually runs. Requests too
    /// short to be selective return an empty list, not an error.
    pub async fn search_cards(&self, name: Option<&str>, set_code: Option<&str>) -> Result<Vec<Card>> {
        log::info!("Searching cards (name {:?}, set {:?})", name, set_code);
        let query = &self.config.query;
        let plan = SearchPlan::new(name, set_code, query.min_search_length);

        let Some((predicate, order_by)) = plan.query(query.sort_set_listings) else {
            log::debug!("[QueryEngine] search term too short, returning no cards");
            return Ok(Vec::new());
        };
        log::debug!("[QueryEngine] search {} order {:?} limit {}", predicate, order_by, query.search_limit);

        logged(
            "searching cards",
            self.store.fetch(&predicate, order_by, 0, query.search_limit).await,
        )
    }

    /// Every set code in the catalog, ascending and without duplicates.
    pub async fn list_set_codes(&self) -> Result<Vec<String>> {
        log::info!("Listing available set codes");
        logged("listing set codes", self.store.distinct_values(CardField::SetCode).await)
    }

    /// Every card uuid in the catalog, ascending.
    pub async fn list_card_uuids(&self) -> Result<Vec<String>> {
        log::info!("Listing card uuids");
        logged("listing card uuids", self.store.distinct_values(CardField::Uuid).await)
    }

    /// The card with `uuid`, or `None` when the catalog has no such card.
    pub async fn get_card(&self, uuid: &str) -> Result<Option<Card>> {
        log::info!("Showing card {}", uuid);
        let card = logged(&format!("showing card {}", uuid), self.store.fetch_by_uuid(uuid).await)?;
        if card.is_none() {
            log::info!("Card {} not found", uuid);
        }
        Ok(card)
    }

    fn set_listing_order(&self) -> OrderBy {
        if self.config.query.sort_set_listings {
            OrderBy::Name
        } else {
            OrderBy::Unspecified
        }
    }
}

fn logged<T>(what: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        log::error!("Error {}: {}", what, e);
    }
    result
}
