// src/paginator.rs
//! Paginator: slices the visible set into pages and works out which
//! page-number controls to show.

use crate::config::consts::{WINDOW_THRESHOLD, WINDOW_WIDTH};

/// A contiguous slice of the visible set. `cards` holds indexes into the
/// widget's card list, never copies of the cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub cards: Vec<usize>,
    pub shown: bool,
}

/// One page-number control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub index: usize,
    pub active: bool,
}

impl PageLink {
    /// What the control reads: pages are numbered from 1 for people.
    pub fn label(&self) -> String { (self.index + 1).to_string() }
}

/// `ceil(len / limit)`; a zero limit counts as 1.
pub fn page_count(len: usize, limit: usize) -> usize {
    len.div_ceil(limit.max(1))
}

/// Split `visible` into pages of at most `limit`. With pagination off the
/// whole set is one page. Page 0 is the shown one.
pub fn build_pages(visible: &[usize], limit: usize, enabled: bool) -> Vec<Page> {
    let mut pages: Vec<Page> = if enabled {
        visible
            .chunks(limit.max(1))
            .enumerate()
            .map(|(index, chunk)| Page { index, cards: chunk.to_vec(), shown: false })
            .collect()
    } else {
        vec![Page { index: 0, cards: visible.to_vec(), shown: false }]
    };

    if let Some(first) = pages.first_mut() {
        first.shown = true;
    }
    pages
}

/// Inclusive index range of the controls to render for `page_count`
/// pages while `current` is shown. `None` when no controls are needed.
///
/// Below the threshold every page gets a control; at or above it a window of
/// six: `[0,5]` near the start, `[P-6,P-1]` near the end, otherwise
/// `[c-2, c+3]`.
pub fn pagination_window(page_count: usize, current: usize) -> Option<(usize, usize)> {
    if page_count <= 1 {
        return None;
    }
    if page_count < WINDOW_THRESHOLD {
        return Some((0, page_count - 1));
    }

    let current = current.min(page_count - 1);
    let last = page_count - 1;
    let window = if current < 5 {
        (0, WINDOW_WIDTH - 1)
    } else if current > page_count - 5 {
        (page_count - WINDOW_WIDTH, last)
    } else {
        (current - 2, current + 3)
    };
    Some(window)
}

/// The controls for `page_count` pages, with `current` marked active.
pub fn build_pagination_controls(page_count: usize, current: usize) -> Vec<PageLink> {
    match pagination_window(page_count, current) {
        Some((start, end)) => (start..=end)
            .map(|index| PageLink { index, active: index == current })
            .collect(),
        None => Vec::new(),
    }
}
