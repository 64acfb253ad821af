//! Query builder utilities
//!
//! This module provides pagination request/result types and the
//! page-boundary arithmetic shared by every paginated query.

use crate::query_builder::filter::Filter;
use crate::query_builder::ordering::SortSpec;
use serde::{Deserialize, Serialize};

/// Caller-supplied page request: page number, page size, sort and filters.
///
/// The request is a plain input value; results come back separately as a
/// [`PageResult`](crate::PageResult). Page numbers are 1-based, with `0`
/// accepted as an alias for the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            sort: None,
            filters: Vec::new(),
        }
    }

    /// Add ordering
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Add a filter condition (combined with AND)
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Row offset of this page; page 0 and page 1 both start at offset 0.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.max(1)) - 1) * i64::from(self.limit)
    }
}

/// One page of records plus its pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub rows: Vec<T>,
    /// Total matching rows across all pages, independent of limit/offset
    pub total_rows: i64,
    /// `ceil(total_rows / limit)`
    pub total_pages: i64,
    /// 1-based inclusive bound of the first row of this page, 0 if out of range
    pub from_row: i64,
    /// 1-based inclusive bound of the last row of this page, clipped to `total_rows`
    pub to_row: i64,
}

/// Page-boundary arithmetic for a known total row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub total_pages: i64,
    pub from_row: i64,
    pub to_row: i64,
}

impl PageBounds {
    /// Compute total pages and 1-based row bounds for a page.
    ///
    /// `limit` must be greater than zero; callers reject zero limits before
    /// reaching this point. Pages 0 and 1 both address the first page and
    /// always yield `from_row = 1`, `to_row = min(limit, total_rows)`. A
    /// page past the last one yields the degenerate `(0, 0)` bounds rather
    /// than an error.
    pub fn compute(page: u32, limit: u32, total_rows: i64) -> Self {
        let limit = i64::from(limit);
        let page = i64::from(page.max(1));

        let total_pages = if total_rows == 0 {
            0
        } else {
            (total_rows + limit - 1) / limit
        };

        let (from_row, to_row) = if page == 1 {
            (1, limit.min(total_rows))
        } else if page <= total_pages {
            ((page - 1) * limit + 1, (page * limit).min(total_rows))
        } else {
            (0, 0)
        };

        Self {
            total_pages,
            from_row,
            to_row,
        }
    }
}
