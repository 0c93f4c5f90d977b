use serde::{Deserialize, Serialize};

use crate::pagination::{total_pages, PageRequest};

/// Pagination envelope returned by every listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginate<T> {
    pub page_number: i64,
    pub row_total_count: i64,
    pub total_page_count: i64,
    pub page_size: i64,
    pub items: Vec<T>,
}

impl<T> Paginate<T> {
    pub fn new(page: PageRequest, row_total_count: i64, items: Vec<T>) -> Self {
        Self {
            page_number: page.page_number,
            row_total_count,
            total_page_count: total_pages(row_total_count, page.page_size),
            page_size: page.page_size,
            items,
        }
    }
}
