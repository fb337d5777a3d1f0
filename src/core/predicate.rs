// src/core/predicate.rs

use std::cmp::Ordering;
use std::fmt;

use crate::core::card::Card;

/// A filter condition over the catalog.
///
/// The query engine builds these and hands them to a [`crate::storage::CardStore`];
/// it never deals with storage-specific query construction itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Every card.
    MatchAll,
    /// `setCode` equals the value exactly.
    SetEquals(String),
    /// `name` contains the value, ignoring case.
    NameContains(String),
    /// Both sides hold.
    And(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    /// `setCode = code`
    pub fn set_equals(code: impl Into<String>) -> Self {
        Predicate::SetEquals(code.into())
    }

    /// `name` contains `needle`, case-insensitively.
    pub fn name_contains(needle: impl Into<String>) -> Self {
        Predicate::NameContains(needle.into())
    }

    /// Conjunction of `self` and `other`. `MatchAll` is the identity.
    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::MatchAll, p) | (p, Predicate::MatchAll) => p,
            (a, b) => Predicate::And(Box::new(a), Box::new(b)),
        }
    }

    /// Evaluates the predicate against a single card.
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Predicate::MatchAll => true,
            Predicate::SetEquals(code) => card.set_code == *code,
            Predicate::NameContains(needle) => contains_ignore_case(&card.name, needle),
            Predicate::And(a, b) => a.matches(card) && b.matches(card),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::MatchAll => f.write_str("*"),
            Predicate::SetEquals(code) => write!(f, "setCode = {:?}", code),
            Predicate::NameContains(needle) => write!(f, "name ~ {:?}", needle),
            Predicate::And(a, b) => write!(f, "({} AND {})", a, b),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Result ordering requested from a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    /// Whatever order the store keeps its cards in. Must be stable across
    /// calls for the same catalog snapshot.
    #[default]
    Unspecified,
    /// `name` ascending. Cards sharing a name are ordered by `uuid` so that
    /// consecutive pages never overlap.
    Name,
}

impl OrderBy {
    /// Compares two cards under this ordering. `Unspecified` falls back to
    /// `uuid`, the natural order of the bundled stores.
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            OrderBy::Name => a.name.cmp(&b.name).then_with(|| a.uuid.cmp(&b.uuid)),
            OrderBy::Unspecified => a.uuid.cmp(&b.uuid),
        }
    }
}
