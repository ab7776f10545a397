//! Pagination over filtered rows.
//!
//! Pages are 1-based. Out-of-range input is clamped rather than rejected: the page
//! number often outlives the filter it was computed for (user is on page 4, then types
//! a search that leaves 2 pages), and the table should land on the last page instead
//! of showing nothing.

use crate::model::{Row, RowId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub items: Vec<&'a Row>,
    /// The page actually served, after clamping
    pub page: usize,
    pub per_page: usize,
    /// Rows across all pages
    pub total: usize,
    /// Always at least 1, even for an empty input
    pub total_pages: usize,
}

impl Page<'_> {
    /// Ids on this page, the domain for the page-level "select all".
    pub fn ids(&self) -> Vec<RowId> {
        self.items.iter().map(|row| row.id().clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out one page. `page` 0 reads as 1, `per_page` 0 reads as 1.
pub fn paginate<'a>(rows: &[&'a Row], page: usize, per_page: usize) -> Page<'a> {
    let per_page = per_page.max(1);
    let total = rows.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);

    Page {
        items: rows[start..end].to_vec(),
        page,
        per_page,
        total,
        total_pages,
    }
}
