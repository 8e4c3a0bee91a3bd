//! Fungible-token types for the Kaiascan API.

use serde::{Deserialize, Serialize};

/// Token metadata and supply statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// e.g. "KIP7", "ERC20"
    pub contract_type: String,
    pub name: String,
    pub symbol: String,
    /// Icon URL
    pub icon: Option<String>,
    pub decimal: u8,
    pub total_supply: f64,
    pub total_transfers: u64,
    pub official_site: Option<String>,
    pub burn_amount: f64,
    pub total_burns: u64,
}

/// Minimal token entry returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub contract_address: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

/// Holder of a fungible token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolder {
    pub holder_address: String,
    /// Amount as decimal string
    pub amount: String,
    /// Share of total supply, in percent
    pub percentage: Option<f64>,
}

/// One fungible-token transfer (also used for burns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub transaction_hash: String,
    pub block_number: u64,
    pub datetime: Option<String>,
    pub contract_address: String,
    pub from: String,
    pub to: String,
    /// Amount as decimal string
    pub amount: String,
    pub symbol: Option<String>,
}
