//! Page and limit pagination primitives.
//!
//! Listing endpoints accept a one-based `page` number and a `limit` page size.
//! [`PageRequest`] validates both and derives the store offset, while
//! [`PageSummary`] reports how the total match count splits into pages.
//!
//! # Examples
//!
//! ```
//! use pagination::PageRequest;
//!
//! let request = PageRequest::new(3, 20).expect("valid page request");
//! assert_eq!(request.offset(), 40);
//!
//! let summary = request.summarise(45);
//! assert_eq!(summary.total_pages, 3);
//! assert!(!summary.has_more);
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when a caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// First page number; pages are one-based.
pub const FIRST_PAGE: u64 = 1;

/// Errors raised when validating raw pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The page number was zero or negative.
    #[error("page must be greater than or equal to 1, got {page}")]
    InvalidPage {
        /// Rejected page number.
        page: i64,
    },
    /// The page size was zero or negative.
    #[error("limit must be greater than or equal to 1, got {limit}")]
    InvalidLimit {
        /// Rejected page size.
        limit: i64,
    },
}

/// Validated one-based page request.
///
/// ## Invariants
/// - `page >= 1`
/// - `limit >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validate raw query parameters into a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidPage`] when `page < 1` and
    /// [`PaginationError::InvalidLimit`] when `limit < 1`. The page is checked
    /// first.
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        let checked_page = u64::try_from(page)
            .ok()
            .filter(|value| *value >= FIRST_PAGE)
            .ok_or(PaginationError::InvalidPage { page })?;
        let checked_limit = u64::try_from(limit)
            .ok()
            .filter(|value| *value >= 1)
            .ok_or(PaginationError::InvalidLimit { limit })?;
        Ok(Self {
            page: checked_page,
            limit: checked_limit,
        })
    }

    /// Request for the first page with the given size.
    ///
    /// A zero `limit` is raised to one.
    #[must_use]
    pub const fn first(limit: u64) -> Self {
        Self {
            page: FIRST_PAGE,
            limit: if limit == 0 { 1 } else { limit },
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of items preceding this page, saturating at `u64::MAX`.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - FIRST_PAGE).saturating_mul(self.limit)
    }

    /// Summarise how `total` matching items split into pages of this size.
    #[must_use]
    pub const fn summarise(&self, total: u64) -> PageSummary {
        PageSummary {
            total,
            total_pages: total.div_ceil(self.limit),
            has_more: self.offset().saturating_add(self.limit) < total,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_LIMIT)
    }
}

/// Totals reported alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Number of items matching the query before pagination.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
    /// Whether items exist beyond the requested page.
    pub has_more: bool,
}
