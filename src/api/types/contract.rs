//! Contract types for the Kaiascan API.

use serde::{Deserialize, Serialize};

/// Creator of a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCreator {
    pub contract_address: String,
    pub creator_address: String,
    pub create_transaction_hash: String,
}
