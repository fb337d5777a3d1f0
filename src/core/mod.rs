// src/core/mod.rs

/// Defines the `Card` record served by the catalog.
pub mod card;
/// Composable filter conditions and result orderings evaluated by a card store.
pub mod predicate;
/// The paginated response envelope.
pub mod page;

pub use card::{Card, CardField};
pub use page::Page;
pub use predicate::{OrderBy, Predicate};
