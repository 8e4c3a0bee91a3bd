//! Transaction types for the Kaiascan API.

use serde::{Deserialize, Serialize};

use crate::api::endpoint::{Pagination, RequestParams};

/// Transaction detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub hash: String,
    pub block_number: u64,
    pub from: String,
    /// `None` for contract deployments
    pub to: Option<String>,
    /// KAIA value as decimal string
    pub value: String,
    pub gas_price: Option<String>,
    /// Receipt status; `None` while pending
    pub status: Option<bool>,
    #[serde(default)]
    pub input: String,
    pub tx_type: Option<String>,
    pub datetime: Option<String>,
}

/// Execution status of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
    /// e.g. "Success", "Fail", "Pending"
    pub status: String,
    pub fail_reason: Option<String>,
}

/// Internal (message-call) transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransaction {
    pub transaction_hash: String,
    pub block_number: u64,
    pub call_id: Option<u32>,
    /// e.g. "call", "create", "delegatecall"
    pub call_type: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub error: Option<String>,
}

/// Log emitted by a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLog {
    pub transaction_hash: String,
    pub block_number: u64,
    pub log_index: u32,
    /// Emitting contract
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
    /// Event signature, e.g. "Transfer(address,address,uint256)"
    pub signature: Option<String>,
}

/// Filters for GET api/v1/transactions/{transactionHash}/event-logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLogParams {
    pub pagination: Pagination,
    /// Event signature or topic0 hash
    pub signature: Option<String>,
}

impl EventLogParams {
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

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub(crate) fn apply(&self, params: RequestParams) -> RequestParams {
        params
            .with_pagination(&self.pagination)
            .with_opt("signature", self.signature.as_deref())
    }
}
