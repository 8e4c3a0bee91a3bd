//! NFT types for the Kaiascan API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::endpoint::{Pagination, RequestParams};

/// A single NFT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftInfo {
    pub token_id: String,
    pub owner: String,
    /// Free-form token metadata as published by the collection.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    pub contract_address: String,
    pub token_uri: Option<String>,
}

/// NFT collection overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollection {
    pub contract_address: String,
    /// "KIP17" or "KIP37"
    pub contract_type: String,
    pub name: String,
    pub symbol: Option<String>,
    pub icon: Option<String>,
    /// Decimal string; KIP37 supplies can exceed u64
    pub total_supply: Option<String>,
    #[serde(default)]
    pub total_transfers: u64,
    #[serde(default)]
    pub holder_count: u64,
}

/// Holder of tokens in an NFT collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftHolder {
    pub holder_address: String,
    pub token_count: u64,
    pub percentage: Option<f64>,
}

/// One NFT transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTransfer {
    pub transaction_hash: String,
    pub block_number: u64,
    pub datetime: Option<String>,
    pub contract_address: String,
    pub from: String,
    pub to: String,
    pub token_id: String,
    /// Always "1" for KIP17
    pub amount: Option<String>,
}

/// Filters for GET api/v1/nfts/{nftAddress}/inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftInventoryParams {
    pub pagination: Pagination,
    pub holder_address: Option<String>,
    pub token_id: Option<String>,
}

impl NftInventoryParams {
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

    pub fn with_holder(mut self, holder_address: impl Into<String>) -> Self {
        self.holder_address = Some(holder_address.into());
        self
    }

    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    pub(crate) fn apply(&self, params: RequestParams) -> RequestParams {
        params
            .with_pagination(&self.pagination)
            .with_opt("holderAddress", self.holder_address.as_deref())
            .with_opt("tokenId", self.token_id.as_deref())
    }
}

/// Filters for GET api/v1/nfts/{nftAddress}/transfers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftTransferParams {
    pub pagination: Pagination,
    pub token_id: Option<String>,
    pub block_number_start: Option<u64>,
    pub block_number_end: Option<u64>,
}

impl NftTransferParams {
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

    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
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
            .with_opt("tokenId", self.token_id.as_deref())
            .with_opt("blockNumberStart", self.block_number_start)
            .with_opt("blockNumberEnd", self.block_number_end)
    }
}
