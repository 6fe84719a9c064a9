//! Pagination over a filtered result.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Products per page in the catalog grid.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// How pages are exposed to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageMode {
    /// One page at a time with previous/next navigation.
    #[default]
    Discrete,
    /// "Load more": every page up to the cursor stays visible.
    Cumulative,
}

impl PageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageMode::Discrete => "discrete",
            PageMode::Cumulative => "cumulative",
        }
    }
}

impl FromStr for PageMode {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discrete" | "pages" => Ok(PageMode::Discrete),
            "cumulative" | "load-more" | "more" => Ok(PageMode::Cumulative),
            other => Err(CommerceError::Validation(format!(
                "unknown page mode '{}' (discrete or cumulative)",
                other
            ))),
        }
    }
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `max(1, ceil(len / page_size))`. A zero page size counts as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Whether a page after `page` exists.
pub fn has_more(len: usize, page: usize, page_size: usize) -> bool {
    page.max(1) < total_pages(len, page_size)
}

/// The items visible at `page` (1-based; 0 counts as 1).
pub fn visible_slice<T>(filtered: &[T], page: usize, page_size: usize, mode: PageMode) -> &[T] {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let end = page.saturating_mul(page_size).min(filtered.len());

    match mode {
        PageMode::Discrete => {
            let start = (page - 1).saturating_mul(page_size).min(filtered.len());
            &filtered[start..end]
        }
        PageMode::Cumulative => &filtered[..end],
    }
}

/// Page policy plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    pub mode: PageMode,
    pub page_size: usize,
}

impl Paginator {
    pub fn new(mode: PageMode, page_size: usize) -> Self {
        Self {
            mode,
            page_size: page_size.max(1),
        }
    }

    pub fn discrete(page_size: usize) -> Self {
        Self::new(PageMode::Discrete, page_size)
    }

    pub fn cumulative(page_size: usize) -> Self {
        Self::new(PageMode::Cumulative, page_size)
    }

    pub fn slice<'a, T>(&self, filtered: &'a [T], page: usize) -> &'a [T] {
        visible_slice(filtered, page, self.page_size, self.mode)
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    pub fn has_more(&self, len: usize, page: usize) -> bool {
        has_more(len, page, self.page_size)
    }

    /// Previous navigation exists only for discrete pages.
    pub fn has_prev(&self, page: usize) -> bool {
        self.mode == PageMode::Discrete && page > 1
    }

    /// Summary of the cursor's position over `len` items.
    pub fn pagination(&self, len: usize, page: usize) -> Pagination {
        Pagination::new(self.mode, page, self.page_size, len)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PageMode::Discrete, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub mode: PageMode,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Whether there's a next page (or more to load).
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(mode: PageMode, page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = total_pages(total, per_page);

        Self {
            mode,
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: mode == PageMode::Discrete && page > 1,
        }
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// First visible item number (1-indexed), 0 when nothing is visible.
    pub fn start_item(&self) -> usize {
        let start = match self.mode {
            PageMode::Discrete => (self.page - 1)
                .saturating_mul(self.per_page)
                .saturating_add(1),
            PageMode::Cumulative => 1,
        };
        if start > self.total {
            0
        } else {
            start
        }
    }

    /// Last visible item number.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            return 0;
        }
        self.page.saturating_mul(self.per_page).min(self.total)
    }

    /// Page numbers for a pager (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = start
            .saturating_add(max_visible.saturating_sub(1))
            .min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PageMode::Discrete, 1, DEFAULT_PAGE_SIZE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_discrete_slice() {
        let items: Vec<u32> = (1..=13).collect();
        assert_eq!(visible_slice(&items, 1, 6, PageMode::Discrete), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(visible_slice(&items, 3, 6, PageMode::Discrete), &[13]);
        assert!(visible_slice(&items, 4, 6, PageMode::Discrete).is_empty());
        assert_eq!(visible_slice(&items, 0, 6, PageMode::Discrete), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_cumulative_slice() {
        let items: Vec<u32> = (1..=13).collect();
        assert_eq!(visible_slice(&items, 1, 6, PageMode::Cumulative).len(), 6);
        assert_eq!(visible_slice(&items, 2, 6, PageMode::Cumulative).len(), 12);
        assert_eq!(visible_slice(&items, 3, 6, PageMode::Cumulative).len(), 13);
        assert_eq!(visible_slice(&items, 9, 6, PageMode::Cumulative).len(), 13);
    }

    #[test]
    fn test_has_more() {
        assert!(has_more(13, 1, 6));
        assert!(has_more(13, 2, 6));
        assert!(!has_more(13, 3, 6));
        assert!(!has_more(0, 1, 6));
    }

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(PageMode::Discrete, 2, 6, 13);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.start_item(), 7);
        assert_eq!(p.end_item(), 12);
    }

    #[test]
    fn test_cumulative_pagination_has_no_prev() {
        let p = Pagination::new(PageMode::Cumulative, 2, 6, 13);
        assert!(!p.has_prev);
        assert!(p.has_next);
        assert_eq!(p.start_item(), 1);
        assert_eq!(p.end_item(), 12);
    }

    #[test]
    fn test_empty_result_pagination() {
        let p = Pagination::new(PageMode::Discrete, 1, 6, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(p.is_first() && p.is_last());
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_page_numbers() {
        let p = Pagination::new(PageMode::Discrete, 5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(PageMode::Discrete, 10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);

        let p = Pagination::new(PageMode::Discrete, 1, 6, 13);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_mode_parse() {
        assert_eq!("Cumulative".parse::<PageMode>().unwrap(), PageMode::Cumulative);
        assert_eq!("load-more".parse::<PageMode>().unwrap(), PageMode::Cumulative);
        assert_eq!("discrete".parse::<PageMode>().unwrap(), PageMode::Discrete);
        assert!(matches!(
            "infinite".parse::<PageMode>(),
            Err(CommerceError::Validation(_))
        ));
    }

    #[test]
    fn test_huge_cursor_does_not_overflow() {
        let p = Pagination::new(PageMode::Cumulative, usize::MAX, 6, 13);
        assert_eq!(p.start_item(), 1);
        assert_eq!(p.end_item(), 13);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);

        let p = Pagination::new(PageMode::Discrete, usize::MAX, 6, 13);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);

        let p = Pagination::new(PageMode::Discrete, usize::MAX, 1, 100);
        assert_eq!(p.page_numbers(5), vec![96, 97, 98, 99, 100]);
    }

    #[test]
    fn test_paginator() {
        let pager = Paginator::cumulative(6);
        assert!(!pager.has_prev(3));
        assert!(Paginator::discrete(6).has_prev(2));
        assert_eq!(Paginator::default().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(pager.pagination(13, 1).total_pages, 3);
    }
}
