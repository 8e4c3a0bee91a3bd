//! Block types for the Kaiascan API.

use serde::{Deserialize, Serialize};

use crate::api::endpoint::{Pagination, RequestParams};

/// Block header summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub number: u64,
    pub hash: String,
    /// Unix seconds
    pub timestamp: u64,
    pub parent_hash: String,
    /// Block proposer
    pub miner: Option<String>,
    pub gas_used: Option<String>,
    pub gas_limit: Option<String>,
    /// Transaction hashes
    #[serde(default)]
    pub transactions: Vec<String>,
}

/// Reward distribution for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRewards {
    pub block_number: u64,
    /// Newly minted KAIA as decimal string
    pub minted: String,
    pub total_fee: String,
    pub burnt_fees: Option<String>,
    #[serde(default)]
    pub distributions: Vec<RewardDistribution>,
}

/// One recipient of a block reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDistribution {
    /// e.g. "proposer", "stakers", "kff", "kcf"
    pub distribution_type: String,
    pub address: Option<String>,
    pub amount: String,
}

/// Filters for GET api/v1/blocks/{blockNumber}/transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockTransactionsParams {
    pub pagination: Pagination,
    pub tx_type: Option<String>,
}

impl BlockTransactionsParams {
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

    pub fn with_type(mut self, tx_type: impl Into<String>) -> Self {
        self.tx_type = Some(tx_type.into());
        self
    }

    pub(crate) fn apply(&self, params: RequestParams) -> RequestParams {
        params
            .with_pagination(&self.pagination)
            .with_opt("type", self.tx_type.as_deref())
    }
}
