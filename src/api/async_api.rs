// src/api/async_api.rs

use crate::api::{ApiError, ApiResult, CardView, ListParams, PageView, SearchParams};
use crate::query::QueryEngine;
use crate::storage::CardStore;

/// Async presentation facade.
///
/// Each operation forwards to the [`QueryEngine`] and converts the outcome
/// into display-ready values. Storage failures surface as
/// [`ApiError::Internal`] with a fixed message; the cause is logged by the
/// engine.
#[derive(Debug)]
pub struct Catalog<S: CardStore + ?Sized + 'static> {
    engine: QueryEngine<S>,
}

impl<S: CardStore + ?Sized + 'static> Clone for Catalog<S> {
    fn clone(&self) -> Self {
        Self { engine: self.engine.clone() }
    }
}

impl<S: CardStore + ?Sized + 'static> Catalog<S> {
    /// Wraps an engine.
    pub fn new(engine: QueryEngine<S>) -> Self {
        Self { engine }
    }

    /// The wrapped engine, for operations the facade does not shape.
    pub fn engine(&self) -> &QueryEngine<S> {
        &self.engine
    }

    /// One page of cards, page 1 when `params.page` is absent.
    pub async fn list_cards(&self, params: &ListParams) -> ApiResult<PageView> {
        self.engine
            .list_cards(params.page(), params.set_code.as_deref())
            .await
            .map(|page| page.map(CardView::from))
            .map_err(|_| ApiError::internal("Error listing cards"))
    }

    /// Search suggestions; empty when the name is too short.
    pub async fn search_cards(&self, params: &SearchParams) -> ApiResult<Vec<CardView>> {
        self.engine
            .search_cards(params.name.as_deref(), params.set_code.as_deref())
            .await
            .map(|cards| cards.into_iter().map(CardView::from).collect())
            .map_err(|_| ApiError::internal("Error searching cards"))
    }

    /// Every set code in the catalog, ascending.
    pub async fn list_set_codes(&self) -> ApiResult<Vec<String>> {
        self.engine
            .list_set_codes()
            .await
            .map_err(|_| ApiError::internal("Error listing set codes"))
    }

    /// A single card, or [`ApiError::NotFound`] when no card has `uuid`.
    pub async fn show_card(&self, uuid: &str) -> ApiResult<CardView> {
        match self.engine.get_card(uuid).await {
            Ok(Some(card)) => Ok(CardView::from(card)),
            Ok(None) => Err(ApiError::card_not_found()),
            Err(_) => Err(ApiError::internal("Error showing card")),
        }
    }
}
