//! Pagination calculator for the list endpoints.
//!
//! Given the caller's requested page, page size, and the total row count, the
//! calculator produces the effective window to fetch plus the metadata the
//! response carries back (total pages, previous/next hints).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Upper bound and fallback for the page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Query parameters shared by the list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Scope the listing to this user.
    pub user_id: Uuid,
    /// Case-insensitive substring match over the endpoint's search columns.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    /// Column of the primary table to order by. Defaults to newest first.
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub order_desc: bool,
    /// Return every matching row in a single page.
    #[serde(default)]
    pub take_all: bool,
    /// Inclusive start of a created-at window, formatted `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive end of a created-at window, formatted `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A resolved pagination window.
///
/// Construction never fails: out-of-range requests are clamped rather than
/// rejected, so the same inputs always resolve to the same window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub current_page: u64,
    pub page_size: u64,
    /// Rows to skip before the window starts.
    pub skip: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pagination {
    /// Resolve a requested `(page, page_size)` against `total` matching rows.
    ///
    /// A page size of zero or above [`DEFAULT_PAGE_SIZE`] falls back to the
    /// default. A page below one, or any page when there are no rows, resolves
    /// to page one.
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let page_size = if page_size == 0 || page_size > DEFAULT_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        let total_pages = total.div_ceil(page_size);
        let current_page = if page < 1 || total_pages == 0 { 1 } else { page };
        let skip = (current_page - 1) * page_size;

        Pagination {
            current_page,
            page_size,
            skip,
            total_count: total,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Widen the window to every matching row, keeping the computed metadata.
    pub fn take_all(&mut self) {
        self.page_size = self.total_count;
    }
}
