//! Incremental "show more" pagination over a [`ResultSet`].
//!
//! The controller reveals the result set in page-sized chunks. Depth starts at
//! one and only grows through [`PaginationController::advance`]; replacing the
//! result set resets it in the same call.

use crate::error::{CatalogError, Result};
use crate::models::Book;
use crate::result_set::ResultSet;
use bridge_traits::presentation::LoadMoreState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Pagination request parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Current page number (0-indexed)
    pub page: usize,
    /// Number of items per page
    pub page_size: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Examples
    ///
    /// ```
    /// use core_catalog::pagination::PageRequest;
    ///
    /// let request = PageRequest::new(0, 36);
    /// assert_eq!(request.page, 0);
    /// assert_eq!(request.page_size, 36);
    /// ```
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Index of the first record of the page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Maximum number of records on the page (same as page_size)
    pub fn limit(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: core_runtime::config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Page snapshot containing items and metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Current page number
    pub page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Number of items per page
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Create a new page snapshot
    ///
    /// # Examples
    ///
    /// ```
    /// use core_catalog::pagination::{Page, PageRequest};
    ///
    /// let page = Page::new(vec![1, 2, 3], 25, PageRequest::new(0, 10));
    ///
    /// assert_eq!(page.items.len(), 3);
    /// assert_eq!(page.total, 25);
    /// assert_eq!(page.total_pages, 3);
    /// ```
    pub fn new(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        let total_pages = if request.page_size == 0 {
            0
        } else {
            total.div_ceil(request.page_size)
        };

        Self {
            items,
            total,
            page: request.page,
            total_pages,
            page_size: request.page_size,
        }
    }

    /// Check if there are more pages after the current one
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Check if there are pages before the current one
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Map the items to a different type
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
            page_size: self.page_size,
        }
    }
}

/// Owns the current result set together with its page depth.
#[derive(Debug, Clone)]
pub struct PaginationController {
    result_set: ResultSet,
    page_size: usize,
    page_depth: usize,
}

impl PaginationController {
    /// # Errors
    ///
    /// [`CatalogError::InvalidInput`] when `page_size` is zero.
    pub fn new(page_size: usize, result_set: ResultSet) -> Result<Self> {
        if page_size == 0 {
            return Err(CatalogError::invalid(
                "page_size",
                "page size must be greater than 0",
            ));
        }

        Ok(Self {
            result_set,
            page_size,
            page_depth: 1,
        })
    }

    /// Swaps in a new result set and returns to the first page.
    pub fn replace(&mut self, result_set: ResultSet) {
        self.result_set = result_set;
        self.page_depth = 1;
    }

    pub fn reset(&mut self) {
        self.page_depth = 1;
    }

    /// Reveals one more page. Returns `false`, leaving state untouched, when
    /// nothing is left to reveal.
    pub fn advance(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page_depth += 1;
        true
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.result_set
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_depth(&self) -> usize {
        self.page_depth
    }

    fn revealed_bound(&self) -> usize {
        self.page_depth.saturating_mul(self.page_size)
    }

    /// Everything revealed so far: `result[0 .. min(depth * size, len)]`.
    pub fn visible_slice(&self) -> &[Arc<Book>] {
        self.result_set.slice(0..self.revealed_bound())
    }

    /// The chunk revealed by the latest step.
    pub fn newly_revealed_slice(&self) -> &[Arc<Book>] {
        let start = (self.page_depth - 1).saturating_mul(self.page_size);
        self.result_set.slice(start..self.revealed_bound())
    }

    pub fn remaining_count(&self) -> usize {
        self.result_set.len().saturating_sub(self.revealed_bound())
    }

    pub fn has_more(&self) -> bool {
        self.remaining_count() > 0
    }

    pub fn load_more_state(&self) -> LoadMoreState {
        LoadMoreState::new(self.remaining_count())
    }

    /// The newly revealed chunk as a 0-indexed page snapshot.
    pub fn current_page(&self) -> Page<Arc<Book>> {
        Page::new(
            self.newly_revealed_slice().to_vec(),
            self.result_set.len(),
            PageRequest::new(self.page_depth - 1, self.page_size),
        )
    }
}
