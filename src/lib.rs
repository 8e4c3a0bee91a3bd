//! # Kaiascan Rust SDK
//!
//! A typed client for the Kaiascan open API, the read-only explorer API of
//! the Kaia blockchain.
//!
//! ## Modules
//!
//! - [`client`]: `KaiascanClient`, one method per API operation
//! - [`api`]: the request/response core (endpoints, URL building, transport,
//!   envelope decoding, errors) and the result types
//! - [`network`]: mainnet / Kairos testnet presets
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kaiascan::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KaiascanClient::builder()
//!         .network(Network::Mainnet)
//!         .api_key("my-api-key")
//!         .build()?;
//!
//!     let token = client.get_fungible_token("0x...").await?;
//!     println!("{} ({})", token.name, token.symbol);
//!
//!     let holders = client
//!         .get_token_holders("0x...", Pagination::new(1, 50))
//!         .await?;
//!     println!("{} holders", holders.paging.total_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom transports
//!
//! Any [`api::Transport`] can be injected with
//! [`KaiascanClientBuilder::transport`](client::KaiascanClientBuilder::transport);
//! the default reqwest transport lives behind the `http` feature.

// ============================================================================
// MODULES
// ============================================================================

/// Network presets (base URLs and chain IDs).
pub mod network;

/// Request/response core and result types.
pub mod api;

/// High-level client.
pub mod client;

pub use client::{KaiascanClient, KaiascanClientBuilder};

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use kaiascan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{KaiascanClient, KaiascanClientBuilder};

    pub use crate::api::{
        ClientConfig, EndpointSpec, ErrorKind, Headers, KaiascanError, KaiascanResult,
        Pagination, RequestParams, Transport,
        // Result shapes
        Account, BlockInfo, BlockRewards, ContractCreator, EventLog, InternalTransaction,
        KeyHistory, NftBalance, NftCollection, NftHolder, NftInfo, NftTransfer, Page, Paging,
        TokenBalance, TokenHolder, TokenInfo, TokenSummary, TokenTransfer, TransactionInfo,
        TransactionStatus,
        // List filters
        AccountTransactionsParams, BlockRangeParams, BlockTransactionsParams, Direction,
        EventLogParams, NftInventoryParams, NftTransferParams, TransferParams,
    };

    pub use crate::network::{Network, MAINNET_API_URL, TESTNET_API_URL};
}
