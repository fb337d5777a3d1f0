//! # Query Module
//!
//! Turns catalog requests into [`crate::storage::CardStore`] queries:
//! - paginated listing, optionally restricted to one set
//! - bounded name search ("quick suggestions")
//! - set code and uuid enumeration
//! - single card lookup
//!
//! All pagination arithmetic, filter composition and search gating lives
//! here; the store only evaluates predicates.

/// Query engine executing catalog operations against a card store.
pub mod engine;
pub mod types;

pub use engine::QueryEngine;
pub use types::{clamp_page, non_empty, page_offset, SearchPlan};
