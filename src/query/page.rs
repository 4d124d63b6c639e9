//! # Paginator
//!
//! Slices a filtered reading sequence into the requested window and
//! derives the pagination metadata.

use serde::Serialize;

use crate::store::Reading;

/// Paginated result envelope for the readings listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPage {
    /// Requested 1-based page number
    pub page: usize,

    /// Requested page size
    pub page_size: usize,

    /// Matching readings across all pages
    pub total_items: usize,

    /// Number of pages at this page size; 0 when nothing matched
    pub total_pages: usize,

    /// Whether a later page exists
    pub has_next: bool,

    /// Whether an earlier page exists
    pub has_prev: bool,

    /// The window of readings for this page, store order
    pub results: Vec<Reading>,
}

impl ReadingPage {
    /// Slice `filtered` into the `(page, limit)` window.
    ///
    /// `limit` must be >= 1 (the validator guarantees it). A page beyond
    /// the last yields an empty `results`, not an error.
    pub fn paginate(filtered: Vec<Reading>, page: usize, limit: usize) -> Self {
        let total_items = filtered.len();
        let total_pages = total_items.div_ceil(limit);
        let start = (page - 1).saturating_mul(limit);
        let results: Vec<Reading> = filtered.into_iter().skip(start).take(limit).collect();

        Self {
            page,
            page_size: limit,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
            results,
        }
    }
}
