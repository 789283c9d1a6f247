//! Pagination query parameters and response metadata.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Default number of items per page.
    pub const DEFAULT_PAGE_SIZE: u32 = 25;

    /// Upper bound on `page_size`.
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries, or an error message when
    /// `page` is zero or `page_size` is outside `1..=100`.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=Self::MAX_PAGE_SIZE).contains(&page_size) {
            return Err(format!(
                "Page size must be between 1 and {}",
                Self::MAX_PAGE_SIZE
            ));
        }

        let offset = i64::from(page - 1) * i64::from(page_size);
        let limit = i64::from(page_size);

        Ok((offset, limit))
    }

    /// Effective page number after defaulting.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Effective page size after defaulting.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata for collection responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Builds metadata from the effective page parameters and total count.
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            ((total_items as u64).div_ceil(u64::from(page_size))) as u32
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}
