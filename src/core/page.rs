// src/core/page.rs

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// `total` counts every matching record regardless of pagination, `page` is
/// the 1-based page that was served and `pages` is `ceil(total / page_size)`,
/// which is `0` for an empty result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in result order.
    pub items: Vec<T>,
    /// Number of matching records across all pages.
    pub total: u64,
    /// The page number served.
    pub page: u64,
    /// Number of pages needed to cover `total`.
    pub pages: u64,
}

impl<T> Page<T> {
    /// Builds the envelope, deriving `pages` from `total` and `page_size`.
    pub fn new(items: Vec<T>, total: u64, page: u64, page_size: u64) -> Self {
        Self {
            items,
            total,
            page,
            pages: page_count(total, page_size),
        }
    }

    /// Converts every item while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            pages: self.pages,
        }
    }
}

/// `ceil(total / page_size)`; a zero page size yields zero pages.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 100), 0);
        assert_eq!(page_count(1, 100), 1);
        assert_eq!(page_count(100, 100), 1);
        assert_eq!(page_count(101, 100), 2);
        assert_eq!(page_count(250, 100), 3);
        assert_eq!(page_count(250, 0), 0);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], 203, 3, 100);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!((mapped.total, mapped.page, mapped.pages), (203, 3, 3));
    }
}
