// src/api/mod.rs

//! Presentation boundary for the catalog.
//!
//! Shapes query engine results for a client: loose request parameters in,
//! display-ready cards and user-facing error bodies out. Transport framing
//! (routes, status lines) belongs to whatever hosts these types.

/// Async facade over the query engine.
pub mod async_api;
/// Blocking facade that owns its own runtime.
pub mod sync_api;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::core::{Card, Page};

/// Replaces every literal backslash-n pair with a newline.
pub fn normalize_text(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// A card as delivered to a presentation client.
///
/// Identical to the stored [`Card`] except that `text` has its escaped
/// newlines expanded. The stored card is never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// See [`Card::uuid`].
    pub uuid: String,
    /// See [`Card::name`].
    pub name: String,
    /// See [`Card::set_code`].
    pub set_code: String,
    /// Rules text with real newlines.
    pub text: String,
    /// Opaque fields, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            text: normalize_text(&card.text),
            uuid: card.uuid,
            name: card.name,
            set_code: card.set_code,
            extra: card.extra,
        }
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        CardView::from(card.clone())
    }
}

/// A listing page as delivered to a presentation client.
pub type PageView = Page<CardView>;

/// Parameters of a paginated listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Requested page; absent means 1.
    #[serde(default)]
    pub page: Option<i64>,
    /// Restricts the listing to one set when non-empty.
    #[serde(default)]
    pub set_code: Option<String>,
}

impl ListParams {
    /// The page to request from the engine.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Parameters of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Name fragment to search for.
    #[serde(default)]
    pub name: Option<String>,
    /// Restricts the search to one set when non-empty.
    #[serde(default)]
    pub set_code: Option<String>,
}

/// A failure as reported to a client.
///
/// Internal details stay in the logs; the message is a fixed sentence per
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The requested card does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The operation could not be completed.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub(crate) fn card_not_found() -> Self {
        ApiError::NotFound("Card not found".to_string())
    }

    pub(crate) fn internal(message: &str) -> Self {
        ApiError::Internal(message.to_string())
    }

    /// The HTTP-style status a transport should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// `{"error": message}`
    pub fn body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Result alias for the boundary facades.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Flying\\nHaste"), "Flying\nHaste");
        assert_eq!(normalize_text("a\\nb\\nc"), "a\nb\nc");
        assert_eq!(normalize_text("no escapes"), "no escapes");
        assert_eq!(normalize_text("already\nreal"), "already\nreal");
    }

    #[test]
    fn test_card_view_leaves_card_untouched() {
        let card = Card::new("1", "Opt", "XLN", "Scry 1.\\nDraw a card.").with_field("artist", "Tyler Jacobson");
        let view = CardView::from(&card);
        assert_eq!(view.text, "Scry 1.\nDraw a card.");
        assert_eq!(card.text, "Scry 1.\\nDraw a card.");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["setCode"], "XLN");
        assert_eq!(json["artist"], "Tyler Jacobson");
    }

    #[test]
    fn test_params_from_query_map() {
        let params: ListParams = serde_json::from_value(json!({"setCode": "M20"})).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.set_code.as_deref(), Some("M20"));

        let params: ListParams = serde_json::from_value(json!({"page": -4})).unwrap();
        assert_eq!(params.page(), -4);

        let search: SearchParams = serde_json::from_value(json!({"name": "dra"})).unwrap();
        assert_eq!(search.name.as_deref(), Some("dra"));
        assert!(search.set_code.is_none());
    }

    #[test]
    fn test_api_error_shape() {
        let err = ApiError::card_not_found();
        assert_eq!(err.status(), 404);
        assert_eq!(err.body(), json!({"error": "Card not found"}));

        let err = ApiError::internal("Error listing cards");
        assert_eq!(err.status(), 500);
        assert_eq!(err.body(), json!({"error": "Error listing cards"}));
    }
}
