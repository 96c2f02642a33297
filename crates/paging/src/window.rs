//! Bounded run of contiguous pages held in memory.

use std::collections::VecDeque;
use storedesk_api::{Page, PageRequest};

/// Pages ordered by ascending offset. Extending one end past `max_pages`
/// evicts from the other end, so the window slides along the collection.
#[derive(Debug, Clone)]
pub struct PageWindow<T> {
    pages: VecDeque<Page<T>>,
    max_pages: usize,
}

impl<T> PageWindow<T> {
    pub fn new(max_pages: usize) -> Self {
        Self {
            pages: VecDeque::new(),
            max_pages: max_pages.max(1),
        }
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> impl DoubleEndedIterator<Item = &Page<T>> {
        self.pages.iter()
    }

    pub fn first(&self) -> Option<&Page<T>> {
        self.pages.front()
    }

    pub fn last(&self) -> Option<&Page<T>> {
        self.pages.back()
    }

    /// Retained items in offset order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Request for the page after the window. An empty window starts at 0.
    pub fn next_request(&self, page_size: usize) -> Option<PageRequest> {
        match self.pages.back() {
            None => Some(PageRequest::new(0, page_size)),
            Some(last) if last.has_more() => Some(PageRequest::new(last.end(), page_size)),
            Some(_) => None,
        }
    }

    /// Request for the page ending right before the window.
    ///
    /// The start is clamped at 0 and the limit shrinks accordingly, so the
    /// fetched page never overlaps the first retained page.
    pub fn previous_request(&self, page_size: usize) -> Option<PageRequest> {
        let first = self.pages.front()?;
        if first.offset == 0 {
            return None;
        }
        let start = first.offset.saturating_sub(page_size);
        Some(PageRequest::new(start, first.offset - start))
    }

    pub fn has_next(&self) -> bool {
        self.pages.back().is_none_or(Page::has_more)
    }

    pub fn has_previous(&self) -> bool {
        self.pages.front().is_some_and(|first| first.offset > 0)
    }

    /// Append at the end, evicting from the front. Returns the evicted pages.
    pub fn push_back(&mut self, page: Page<T>) -> Vec<Page<T>> {
        self.pages.push_back(page);
        let mut evicted = Vec::new();
        while self.pages.len() > self.max_pages {
            if let Some(page) = self.pages.pop_front() {
                evicted.push(page);
            }
        }
        evicted
    }

    /// Prepend at the start, evicting from the back. Returns the evicted pages.
    pub fn push_front(&mut self, page: Page<T>) -> Vec<Page<T>> {
        self.pages.push_front(page);
        let mut evicted = Vec::new();
        while self.pages.len() > self.max_pages {
            if let Some(page) = self.pages.pop_back() {
                evicted.push(page);
            }
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
