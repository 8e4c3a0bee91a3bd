//! Shapes shared by several resources.

use serde::{Deserialize, Serialize};

use crate::api::endpoint::{Pagination, RequestParams};

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub paging: Paging,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when the server reports no further pages.
    pub fn is_last(&self) -> bool {
        self.paging.last
    }
}

/// Paging cursor returned alongside list results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paging {
    pub total_count: u64,
    pub current_page: u32,
    pub last: bool,
    pub total_page: u32,
}

/// Inclusive block-number window plus pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockRangeParams {
    pub pagination: Pagination,
    pub block_number_start: Option<u64>,
    pub block_number_end: Option<u64>,
}

impl BlockRangeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.pagination.size = Some(size);
        self
    }

    /// Set block range.
    pub fn with_block_range(mut self, start: u64, end: u64) -> Self {
        self.block_number_start = Some(start);
        self.block_number_end = Some(end);
        self
    }

    pub(crate) fn apply(&self, params: RequestParams) -> RequestParams {
        params
            .with_pagination(&self.pagination)
            .with_opt("blockNumberStart", self.block_number_start)
            .with_opt("blockNumberEnd", self.block_number_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "results": [1, 2, 3],
            "paging": {"totalCount": 30, "currentPage": 1, "last": false, "totalPage": 10}
        }"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.paging.total_count, 30);
        assert_eq!(page.paging.total_page, 10);
        assert!(!page.is_last());
    }

    #[test]
    fn test_page_without_paging() {
        let page: Page<u32> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.paging, Paging::default());
    }

    #[test]
    fn test_block_range_params() {
        let params = BlockRangeParams::new()
            .with_page(2)
            .with_size(10)
            .with_block_range(100, 200)
            .apply(RequestParams::new());
        assert_eq!(params.len(), 4);
        assert_eq!(params.get("blockNumberEnd").and_then(|v| v.as_int()), Some(200));
    }
}
