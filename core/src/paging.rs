// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Records split into fixed-size pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingResult<T> {
    /// The records, in input order.
    pub filtered_records: Vec<T>,

    /// Number of pages, zero when there are no records.
    pub total_pages: usize,
}

impl<T> PagingResult<T> {
    /// The records shown on page `index`.
    pub fn page(&self, index: usize, cells_per_page: usize) -> &[T] {
        slice_for_page(&self.filtered_records, index, cells_per_page)
    }
}

/// Cells on one page of a `rows` × `columns` grid, at least one.
pub fn cells_per_page(rows: u32, columns: u32) -> usize {
    let cells = usize::try_from(rows.saturating_mul(columns)).unwrap_or(usize::MAX);
    cells.max(1)
}

/// Computes the page count of `records` on a `rows` × `columns` grid.
pub fn paginate<T>(records: Vec<T>, rows: u32, columns: u32) -> PagingResult<T> {
    let cells = cells_per_page(rows, columns);
    let total_pages = records.len().div_ceil(cells);
    PagingResult {
        filtered_records: records,
        total_pages,
    }
}

/// The records on page `page`; empty when the page is out of range.
pub fn slice_for_page<T>(records: &[T], page: usize, cells_per_page: usize) -> &[T] {
    let cells = cells_per_page.max(1);
    let Some(start) = page.checked_mul(cells) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(cells).min(records.len());
    records.get(start..end).unwrap_or_default()
}

/// The page after `current`, wrapping to the first one.
pub fn next_page(current: usize, total_pages: usize) -> usize {
    match total_pages {
        0 => 0,
        total => (current + 1) % total,
    }
}
