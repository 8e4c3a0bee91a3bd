//! Account-related types for the Kaiascan API.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::endpoint::{Pagination, RequestParams};

/// Account summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account address (0x-prefixed hex)
    pub address: String,
    /// "EOA" or "SCA"
    pub account_type: String,
    /// KAIA balance as decimal string
    pub balance: String,
    #[serde(default)]
    pub total_transaction_count: u64,
    pub contract_type: Option<String>,
    pub contract_name: Option<String>,
    /// KNS name, when one is registered
    pub kns_domain: Option<String>,
    pub account_key_type: Option<String>,
}

/// One account key change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyHistory {
    pub transaction_hash: String,
    pub block_number: u64,
    pub account_key_type: String,
    pub datetime: Option<String>,
}

/// Fungible token held by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub contract_address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimal: Option<u8>,
    /// Balance as decimal string (already scaled by `decimal`)
    pub balance: String,
}

/// NFT collection held by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftBalance {
    pub contract_address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// "KIP17" or "KIP37"
    pub nft_type: Option<String>,
    #[serde(default)]
    pub token_count: u64,
}

/// Transfer direction relative to the queried account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    /// Sender and receiver are the same account.
    SelfTransfer,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::SelfTransfer => "self",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for GET api/v1/accounts/{accountAddress}/transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountTransactionsParams {
    pub pagination: Pagination,
    pub block_number_start: Option<u64>,
    pub block_number_end: Option<u64>,
    /// Transaction type filter, e.g. "legacy" or "fee_delegated"
    pub tx_type: Option<String>,
    /// Empty means no direction filter.
    pub directions: Vec<Direction>,
}

impl AccountTransactionsParams {
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

    pub fn with_type(mut self, tx_type: impl Into<String>) -> Self {
        self.tx_type = Some(tx_type.into());
        self
    }

    pub fn with_directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions = directions.into_iter().collect();
        self
    }

    pub(crate) fn apply(&self, params: RequestParams) -> RequestParams {
        let params = params
            .with_pagination(&self.pagination)
            .with_opt("blockNumberStart", self.block_number_start)
            .with_opt("blockNumberEnd", self.block_number_end)
            .with_opt("type", self.tx_type.as_deref());
        if self.directions.is_empty() {
            return params;
        }
        let directions: Vec<String> = self
            .directions
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        params.with("directions", directions)
    }
}

/// Filters for account token/NFT transfer listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferParams {
    pub pagination: Pagination,
    /// Restrict to one token contract
    pub contract_address: Option<String>,
    pub block_number_start: Option<u64>,
    pub block_number_end: Option<u64>,
}

impl TransferParams {
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

    pub fn with_contract(mut self, contract_address: impl Into<String>) -> Self {
        self.contract_address = Some(contract_address.into());
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
            .with_opt("contractAddress", self.contract_address.as_deref())
            .with_opt("blockNumberStart", self.block_number_start)
            .with_opt("blockNumberEnd", self.block_number_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::ParamValue;

    #[test]
    fn test_transactions_params_apply() {
        let params = AccountTransactionsParams::new()
            .with_size(25)
            .with_type("legacy")
            .with_directions([Direction::Out, Direction::SelfTransfer])
            .apply(RequestParams::new());

        assert_eq!(params.get("size"), Some(&ParamValue::Int(25)));
        assert_eq!(params.get("type"), Some(&ParamValue::from("legacy")));
        assert_eq!(params.get("directions"), Some(&ParamValue::from(vec!["out", "self"])));
        assert!(params.get("page").is_none());
    }

    #[test]
    fn test_no_directions_means_no_param() {
        let params = AccountTransactionsParams::new().apply(RequestParams::new());
        assert!(params.is_empty());
    }
}
