// src/query/types.rs

use crate::core::{OrderBy, Predicate};

/// Clamps a requested page number to the first page. Zero and negative
/// pages are served as page 1 rather than rejected.
pub fn clamp_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Number of matches to skip for a 1-based `page`. Saturates instead of
/// overflowing for absurd page numbers.
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Treats an empty filter value the same as an absent one.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// What a search request turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Every card of one set, no name filter and no length gate.
    SetOnly {
        /// The set to list.
        set_code: String,
    },
    /// Case-insensitive name substring search, optionally within one set.
    Name {
        /// The substring to look for.
        name: String,
        /// Restricts the search to one set when present.
        set_code: Option<String>,
    },
    /// Too unselective to run; answered with an empty result.
    Empty,
}

impl SearchPlan {
    /// Decides how to serve a search for `name` within `set_code`.
    ///
    /// An empty name with a set lists that set. Otherwise the name must be at
    /// least `min_length` characters long or nothing is returned, whatever
    /// the set filter says.
    ///
    /// Length counts Unicode scalar values, not UTF-8 bytes: `"Æt"` is two
    /// characters and stays below the default minimum of three even though it
    /// is three bytes long.
    pub fn new(name: Option<&str>, set_code: Option<&str>, min_length: usize) -> Self {
        let name = name.unwrap_or_default();
        let set_code = non_empty(set_code);

        match set_code {
            Some(code) if name.is_empty() => SearchPlan::SetOnly { set_code: code.to_string() },
            _ if name.chars().count() >= min_length => SearchPlan::Name {
                name: name.to_string(),
                set_code: set_code.map(str::to_string),
            },
            _ => SearchPlan::Empty,
        }
    }

    /// The predicate and ordering to hand to the store, or `None` for
    /// [`SearchPlan::Empty`]. `sort_set_only` selects name ordering for the
    /// set-only branch.
    pub fn query(&self, sort_set_only: bool) -> Option<(Predicate, OrderBy)> {
        match self {
            SearchPlan::SetOnly { set_code } => {
                let order = if sort_set_only { OrderBy::Name } else { OrderBy::Unspecified };
                Some((Predicate::set_equals(set_code.as_str()), order))
            }
            SearchPlan::Name { name, set_code } => {
                let mut predicate = Predicate::name_contains(name.as_str());
                if let Some(code) = set_code {
                    predicate = predicate.and(Predicate::set_equals(code.as_str()));
                }
                Some((predicate, OrderBy::Name))
            }
            SearchPlan::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(-5), 1);
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(1), 1);
        assert_eq!(clamp_page(7), 7);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 100), 0);
        assert_eq!(page_offset(3, 100), 200);
        assert_eq!(page_offset(u64::MAX, 100), u64::MAX);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("M20")), Some("M20"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_plan_set_only() {
        let plan = SearchPlan::new(Some(""), Some("M20"), 3);
        assert_eq!(plan, SearchPlan::SetOnly { set_code: "M20".into() });
        assert_eq!(SearchPlan::new(None, Some("M20"), 3), plan);
    }

    #[test]
    fn test_plan_name_with_and_without_set() {
        assert_eq!(
            SearchPlan::new(Some("dra"), Some("M20"), 3),
            SearchPlan::Name { name: "dra".into(), set_code: Some("M20".into()) }
        );
        assert_eq!(
            SearchPlan::new(Some("dra"), Some(""), 3),
            SearchPlan::Name { name: "dra".into(), set_code: None }
        );
    }

    #[test]
    fn test_plan_short_names_are_empty() {
        assert_eq!(SearchPlan::new(Some("dr"), None, 3), SearchPlan::Empty);
        assert_eq!(SearchPlan::new(Some("dr"), Some("M20"), 3), SearchPlan::Empty);
        assert_eq!(SearchPlan::new(Some(""), None, 3), SearchPlan::Empty);
        assert_eq!(SearchPlan::new(None, None, 3), SearchPlan::Empty);
    }

    #[test]
    fn test_plan_counts_characters_not_bytes() {
        // Three characters, four bytes.
        assert!(matches!(SearchPlan::new(Some("Æth"), None, 3), SearchPlan::Name { .. }));
        assert_eq!(SearchPlan::new(Some("Æ"), None, 2), SearchPlan::Empty);
        // Two characters, three bytes: still too short.
        assert_eq!(SearchPlan::new(Some("Æt"), None, 3), SearchPlan::Empty);
    }

    #[test]
    fn test_plan_queries() {
        let (predicate, order) = SearchPlan::new(Some("dra"), Some("M20"), 3).query(false).unwrap();
        assert_eq!(predicate, Predicate::name_contains("dra").and(Predicate::set_equals("M20")));
        assert_eq!(order, OrderBy::Name);

        let (_, order) = SearchPlan::new(None, Some("M20"), 3).query(false).unwrap();
        assert_eq!(order, OrderBy::Unspecified);
        let (_, order) = SearchPlan::new(None, Some("M20"), 3).query(true).unwrap();
        assert_eq!(order, OrderBy::Name);

        assert!(SearchPlan::Empty.query(true).is_none());
    }
}
