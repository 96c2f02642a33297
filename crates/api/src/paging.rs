use crate::ApiResult;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One batch returned by an offset-paginated list endpoint.
///
/// `count` is the total number of items the server holds for the query; it is
/// authoritative, so a well-formed page always satisfies
/// `offset + items.len() <= count`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub count: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, offset: usize, limit: usize, count: usize) -> Self {
        Self {
            items,
            offset,
            limit,
            count,
        }
    }

    /// Offset of the first item after this page.
    pub fn end(&self) -> usize {
        self.offset + self.limit
    }

    /// Whether the server holds items beyond this page.
    pub fn has_more(&self) -> bool {
        self.end() < self.count
    }

    pub fn is_consistent(&self) -> bool {
        self.offset + self.items.len() <= self.count
    }
}

/// Parameters for a single page fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    /// Endpoint specific filters, forwarded untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters;
        self
    }
}

/// Any list endpoint that answers `(offset, limit, ...filters)` with a [`Page`].
#[async_trait]
pub trait PagedSource<T>: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<Page<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_reports_remaining_items() {
        let page = Page::new(vec![1, 2], 20, 20, 45);
        assert_eq!(page.end(), 40);
        assert!(page.has_more());

        let last = Page::new(vec![1; 5], 40, 5, 45);
        assert!(!last.has_more());
        assert!(last.is_consistent());
    }

    #[test]
    fn page_beyond_count_is_inconsistent() {
        let page = Page::new(vec![0; 10], 40, 20, 45);
        assert!(!page.is_consistent());
    }

    #[test]
    fn request_serializes_without_empty_filters() {
        let json = serde_json::to_value(PageRequest::new(20, 20)).unwrap();
        assert_eq!(json, serde_json::json!({ "offset": 20, "limit": 20 }));
    }
}
