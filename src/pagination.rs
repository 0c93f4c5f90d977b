//! Page arithmetic shared by every listing endpoint.

/// Search results are capped at this many cards
pub const SEARCH_MAX_LIMIT: i64 = 20;

/// Limit used when a search limit falls outside `1..=SEARCH_MAX_LIMIT`
pub const SEARCH_DEFAULT_LIMIT: i64 = 10;

/// Number of rows to skip for a 1-based page. Callers normalize first.
/// Saturates at `i64::MAX`, which simply yields an empty page.
pub fn offset(page_number: i64, page_size: i64) -> i64 {
    (page_number - 1).saturating_mul(page_size)
}

/// Ceiling division of `total_count` by `page_size`; 0 when the size is not positive.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total_count <= 0 {
        return 0;
    }
    total_count / page_size + i64::from(total_count % page_size != 0)
}

/// Page request with both values guaranteed to be at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Replace a page number below 1 with 1 and a page size below 1 with `default_size`.
    pub fn normalize(page_number: Option<i64>, page_size: Option<i64>, default_size: i64) -> Self {
        let page_number = match page_number {
            Some(n) if n >= 1 => n,
            _ => 1,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 => s,
            _ => default_size.max(1),
        };
        Self { page_number, page_size }
    }

    pub fn offset(&self) -> i64 {
        offset(self.page_number, self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// Keep a search limit inside `1..=SEARCH_MAX_LIMIT`, falling back to the default otherwise.
pub fn clamp_search_limit(limit: i64) -> i64 {
    if (1..=SEARCH_MAX_LIMIT).contains(&limit) {
        limit
    } else {
        SEARCH_DEFAULT_LIMIT
    }
}
