//! Page-based retrieval results.
//!
//! [`Page`] is the contract between the document builders and whatever
//! storage hands out listings: one page of items plus the cursor state
//! (`total`, `page`, `per_page`) that navigation links are computed from.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, page: usize, per_page: usize) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
        }
    }

    /// Number of pages. An empty listing still has one (empty) page.
    pub fn pages(&self) -> usize {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn prev_num(&self) -> Option<usize> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<usize> {
        self.has_next().then(|| self.page + 1)
    }

    /// Zero-based index of the first item on this page.
    pub fn start_index(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

impl<T: Clone> Page<T> {
    /// Cut page `page` out of a fully materialized listing.
    pub fn from_slice(all: &[T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let start = page.saturating_sub(1).saturating_mul(per_page).min(all.len());
        let end = start.saturating_add(per_page).min(all.len());
        Self::new(all[start..end].to_vec(), all.len(), page, per_page)
    }
}
