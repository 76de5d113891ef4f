//! Paginator
//!
//! Page arithmetic over an already-filtered list. Pages are 1-based and the
//! requested page is always clamped into `[1, page_count]`.

use serde::Serialize;

/// Default number of cards per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, in list order
    pub items: &'a [T],
    /// Page actually shown (after clamping)
    pub number: usize,
    /// Total number of pages, at least 1
    pub page_count: usize,
    /// Length of the whole list
    pub total: usize,
}

/// State of the numbered page buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub page_count: usize,
}

impl PageControls {
    /// Page numbers in button order
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.page_count
    }

    pub fn is_current(&self, page: usize) -> bool {
        page == self.current
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }
}

/// Total pages for a list length, never less than 1
pub fn page_count(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Clamp a requested page into the valid range
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(len, page_size))
}

/// Slice out one page
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let page_count = page_count(list.len(), size);
    let number = page.clamp(1, page_count);

    let start = ((number - 1) * size).min(list.len());
    let end = (start + size).min(list.len());

    Page {
        items: &list[start..end],
        number,
        page_count,
        total: list.len(),
    }
}

impl<T> Page<'_, T> {
    pub fn controls(&self) -> PageControls {
        PageControls {
            current: self.number,
            page_count: self.page_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
