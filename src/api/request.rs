//! List request and response envelopes

use serde::{Deserialize, Serialize};

use super::filters::Filters;
use super::sort::Sort;

/// A paginated, filtered, ordered list request over one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest<F, S> {
    /// Zero-based page index
    #[serde(default)]
    pub page: usize,
    /// Items per page; 0 selects the configured default
    #[serde(default)]
    pub page_size: usize,
    pub filters: Option<Filters<F, S>>,
    pub sort: Option<Sort<F>>,
}

impl<F, S> ListRequest<F, S> {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            filters: None,
            sort: None,
        }
    }

    pub fn with_filters(mut self, filters: Filters<F, S>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_sort(mut self, sort: Sort<F>) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl<F, S> Default for ListRequest<F, S> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// One page of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Number of matching items across all pages
    pub total: usize,
}
