//! High-level client: `KaiascanClient`, one method per API operation.
//!
//! The client owns a swappable [`ClientConfig`] and an [`ApiClient`]. Every
//! method takes one config snapshot when it starts, builds its
//! [`RequestParams`] and hands off to [`ApiClient::invoke`]. Setters replace
//! the whole snapshot; calls already in flight keep the one they took.

use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;
use serde::de::DeserializeOwned;

use crate::api::client::ApiClient;
use crate::api::config::{ClientConfig, Headers};
use crate::api::endpoint::{EndpointSpec, Pagination, RequestParams};
use crate::api::error::{KaiascanError, KaiascanResult};
use crate::api::routes;
use crate::api::transport::Transport;
use crate::api::types::*;
use crate::network::Network;

/// The primary entry point for the SDK.
///
/// Cheap to clone; clones share the transport and the config slot, so a
/// setter called on one clone is seen by calls started on any other.
#[derive(Clone)]
pub struct KaiascanClient {
    api: ApiClient,
    config: Arc<RwLock<Arc<ClientConfig>>>,
}

impl std::fmt::Debug for KaiascanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaiascanClient").finish_non_exhaustive()
    }
}

impl KaiascanClient {
    pub fn builder() -> KaiascanClientBuilder {
        KaiascanClientBuilder::default()
    }

    /// Mainnet client with the default HTTP transport.
    #[cfg(feature = "http")]
    pub fn new() -> KaiascanResult<Self> {
        Self::builder().build()
    }

    #[cfg(feature = "http")]
    pub fn mainnet() -> KaiascanResult<Self> {
        Self::builder().network(Network::Mainnet).build()
    }

    #[cfg(feature = "http")]
    pub fn testnet() -> KaiascanResult<Self> {
        Self::builder().network(Network::Testnet).build()
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// The snapshot the next call would use.
    pub async fn config(&self) -> Arc<ClientConfig> {
        self.config.read().await.clone()
    }

    pub async fn set_config(&self, config: ClientConfig) {
        *self.config.write().await = Arc::new(config);
    }

    pub async fn set_base_url(&self, url: &str) {
        self.update(|config| config.with_base_url(url)).await;
    }

    /// Replace the header set wholesale.
    pub async fn set_headers(&self, headers: Headers) {
        self.update(|config| config.with_headers(headers)).await;
    }

    /// Add or overwrite one header. Other headers are kept.
    pub async fn set_header(&self, name: &str, value: &str) {
        self.update(|config| config.with_header(name, value)).await;
    }

    /// Switch base URL and chain ID to `network`. Headers are kept.
    pub async fn set_network(&self, network: Network) {
        self.update(|config| config.with_network(network)).await;
        tracing::debug!(network = %network, "Switched network");
    }

    async fn update(&self, change: impl FnOnce(ClientConfig) -> ClientConfig) {
        let mut slot = self.config.write().await;
        let next = change(ClientConfig::clone(&slot));
        *slot = Arc::new(next);
    }

    // ── Generic access ───────────────────────────────────────────────────

    /// Call any endpoint through the validated core.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointSpec,
        params: RequestParams,
    ) -> KaiascanResult<T> {
        let config = self.config().await;
        self.api.invoke(&config, endpoint, params).await
    }

    /// [`invoke`](Self::invoke) returning `data` as raw JSON.
    pub async fn invoke_json(
        &self,
        endpoint: &EndpointSpec,
        params: RequestParams,
    ) -> KaiascanResult<serde_json::Value> {
        self.invoke(endpoint, params).await
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn get_account(&self, address: &str) -> KaiascanResult<Account> {
        self.invoke(&routes::ACCOUNT_INFO, account(address)).await
    }

    pub async fn get_account_key_histories(
        &self,
        address: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<KeyHistory>> {
        let params = account(address).with_pagination(&pagination);
        self.invoke(&routes::ACCOUNT_KEY_HISTORIES, params).await
    }

    pub async fn get_account_transactions(
        &self,
        address: &str,
        params: AccountTransactionsParams,
    ) -> KaiascanResult<Page<TransactionInfo>> {
        let params = params.apply(account(address));
        self.invoke(&routes::ACCOUNT_TRANSACTIONS, params).await
    }

    pub async fn get_account_token_transfers(
        &self,
        address: &str,
        params: TransferParams,
    ) -> KaiascanResult<Page<TokenTransfer>> {
        let params = params.apply(account(address));
        self.invoke(&routes::ACCOUNT_TOKEN_TRANSFERS, params).await
    }

    pub async fn get_account_nft_transfers(
        &self,
        address: &str,
        params: TransferParams,
    ) -> KaiascanResult<Page<NftTransfer>> {
        let params = params.apply(account(address));
        self.invoke(&routes::ACCOUNT_NFT_TRANSFERS, params).await
    }

    pub async fn get_account_token_balances(
        &self,
        address: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<TokenBalance>> {
        let params = account(address).with_pagination(&pagination);
        self.invoke(&routes::ACCOUNT_TOKEN_BALANCES, params).await
    }

    pub async fn get_account_nft_balances(
        &self,
        address: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<NftBalance>> {
        let params = account(address).with_pagination(&pagination);
        self.invoke(&routes::ACCOUNT_NFT_BALANCES, params).await
    }

    pub async fn get_account_internal_transactions(
        &self,
        address: &str,
        params: BlockRangeParams,
    ) -> KaiascanResult<Page<InternalTransaction>> {
        let params = params.apply(account(address));
        self.invoke(&routes::ACCOUNT_INTERNAL_TRANSACTIONS, params).await
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    pub async fn get_fungible_token(&self, token_address: &str) -> KaiascanResult<TokenInfo> {
        self.invoke(&routes::FUNGIBLE_TOKEN, token(token_address)).await
    }

    pub async fn get_token_holders(
        &self,
        token_address: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<TokenHolder>> {
        let params = token(token_address).with_pagination(&pagination);
        self.invoke(&routes::TOKEN_HOLDERS, params).await
    }

    pub async fn get_token_transfers(
        &self,
        token_address: &str,
        params: BlockRangeParams,
    ) -> KaiascanResult<Page<TokenTransfer>> {
        let params = params.apply(token(token_address));
        self.invoke(&routes::TOKEN_TRANSFERS, params).await
    }

    pub async fn get_token_burns(
        &self,
        token_address: &str,
        params: BlockRangeParams,
    ) -> KaiascanResult<Page<TokenTransfer>> {
        let params = params.apply(token(token_address));
        self.invoke(&routes::TOKEN_BURNS, params).await
    }

    pub async fn search_tokens(
        &self,
        keyword: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<TokenSummary>> {
        let params = RequestParams::new()
            .with_pagination(&pagination)
            .with("keyword", keyword);
        self.invoke(&routes::TOKEN_SEARCH, params).await
    }

    // =========================================================================
    // NFTs
    // =========================================================================

    /// A single token of an NFT contract.
    pub async fn get_nft_item(&self, nft_address: &str, token_id: &str) -> KaiascanResult<NftInfo> {
        let params = nft(nft_address).with("tokenId", token_id);
        self.invoke(&routes::NFT_ITEM, params).await
    }

    /// Collection-level details of an NFT contract.
    pub async fn get_nft(&self, nft_address: &str) -> KaiascanResult<NftCollection> {
        self.invoke(&routes::NFT_COLLECTION, nft(nft_address)).await
    }

    pub async fn get_nft_inventory(
        &self,
        nft_address: &str,
        params: NftInventoryParams,
    ) -> KaiascanResult<Page<NftInfo>> {
        let params = params.apply(nft(nft_address));
        self.invoke(&routes::NFT_INVENTORY, params).await
    }

    pub async fn get_nft_holders(
        &self,
        nft_address: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<NftHolder>> {
        let params = nft(nft_address).with_pagination(&pagination);
        self.invoke(&routes::NFT_HOLDERS, params).await
    }

    pub async fn get_nft_transfers(
        &self,
        nft_address: &str,
        params: NftTransferParams,
    ) -> KaiascanResult<Page<NftTransfer>> {
        let params = params.apply(nft(nft_address));
        self.invoke(&routes::NFT_TRANSFERS, params).await
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    pub async fn get_latest_block(&self) -> KaiascanResult<BlockInfo> {
        self.invoke(&routes::LATEST_BLOCK, RequestParams::new()).await
    }

    pub async fn get_block(&self, block_number: u64) -> KaiascanResult<BlockInfo> {
        self.invoke(&routes::BLOCK_BY_NUMBER, block(block_number)).await
    }

    pub async fn get_blocks(&self, params: BlockRangeParams) -> KaiascanResult<Page<BlockInfo>> {
        let params = params.apply(RequestParams::new());
        self.invoke(&routes::BLOCK_LIST, params).await
    }

    pub async fn get_transactions_of_block(
        &self,
        block_number: u64,
        params: BlockTransactionsParams,
    ) -> KaiascanResult<Page<TransactionInfo>> {
        let params = params.apply(block(block_number));
        self.invoke(&routes::BLOCK_TRANSACTIONS, params).await
    }

    pub async fn get_block_rewards(&self, block_number: u64) -> KaiascanResult<BlockRewards> {
        self.invoke(&routes::BLOCK_REWARDS, block(block_number)).await
    }

    pub async fn get_internal_transactions_of_block(
        &self,
        block_number: u64,
        pagination: Pagination,
    ) -> KaiascanResult<Page<InternalTransaction>> {
        let params = block(block_number).with_pagination(&pagination);
        self.invoke(&routes::BLOCK_INTERNAL_TRANSACTIONS, params).await
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    pub async fn get_transaction(&self, hash: &str) -> KaiascanResult<TransactionInfo> {
        self.invoke(&routes::TRANSACTION_INFO, transaction(hash)).await
    }

    pub async fn get_transaction_status(&self, hash: &str) -> KaiascanResult<TransactionStatus> {
        self.invoke(&routes::TRANSACTION_STATUS, transaction(hash)).await
    }

    /// `true` when the receipt reports success.
    pub async fn get_transaction_receipt_status(&self, hash: &str) -> KaiascanResult<bool> {
        self.invoke(&routes::TRANSACTION_RECEIPT_STATUS, transaction(hash))
            .await
    }

    pub async fn get_transaction_token_transfers(
        &self,
        hash: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<TokenTransfer>> {
        let params = transaction(hash).with_pagination(&pagination);
        self.invoke(&routes::TRANSACTION_TOKEN_TRANSFERS, params).await
    }

    pub async fn get_transaction_nft_transfers(
        &self,
        hash: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<NftTransfer>> {
        let params = transaction(hash).with_pagination(&pagination);
        self.invoke(&routes::TRANSACTION_NFT_TRANSFERS, params).await
    }

    pub async fn get_transaction_event_logs(
        &self,
        hash: &str,
        params: EventLogParams,
    ) -> KaiascanResult<Page<EventLog>> {
        let params = params.apply(transaction(hash));
        self.invoke(&routes::TRANSACTION_EVENT_LOGS, params).await
    }

    pub async fn get_transaction_internal_transactions(
        &self,
        hash: &str,
        pagination: Pagination,
    ) -> KaiascanResult<Page<InternalTransaction>> {
        let params = transaction(hash).with_pagination(&pagination);
        self.invoke(&routes::TRANSACTION_INTERNAL_TRANSACTIONS, params)
            .await
    }

    // =========================================================================
    // Contracts
    // =========================================================================

    /// Verified source of a contract.
    pub async fn get_contract_source_code(&self, contract_address: &str) -> KaiascanResult<String> {
        let params = RequestParams::new().with("contractAddress", contract_address);
        self.invoke(&routes::CONTRACT_SOURCE_CODE, params).await
    }

    /// Creation bytecode of a contract.
    pub async fn get_contract_creation_code(
        &self,
        contract_address: &str,
    ) -> KaiascanResult<String> {
        let params = RequestParams::new().with("contractAddress", contract_address);
        self.invoke(&routes::CONTRACT_CREATION_CODE, params).await
    }

    /// Creator and creation transaction for each contract.
    ///
    /// An empty slice is rejected before any request is made.
    pub async fn get_contract_creators(
        &self,
        contract_addresses: &[&str],
    ) -> KaiascanResult<Vec<ContractCreator>> {
        if contract_addresses.is_empty() {
            return Err(KaiascanError::validation(
                "contractAddresses",
                "at least one address is required",
            ));
        }
        let params = RequestParams::new().with("contractAddresses", contract_addresses);
        self.invoke(&routes::CONTRACT_CREATORS, params).await
    }
}

fn account(address: &str) -> RequestParams {
    RequestParams::new().with("accountAddress", address)
}

fn token(address: &str) -> RequestParams {
    RequestParams::new().with("tokenAddress", address)
}

fn nft(address: &str) -> RequestParams {
    RequestParams::new().with("nftAddress", address)
}

fn block(number: u64) -> RequestParams {
    RequestParams::new().with("blockNumber", number)
}

fn transaction(hash: &str) -> RequestParams {
    RequestParams::new().with("transactionHash", hash)
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`KaiascanClient`].
///
/// Starts from the mainnet preset. Without [`transport`](Self::transport),
/// `build` creates a [`ReqwestTransport`](crate::api::ReqwestTransport)
/// (requires the `http` feature).
#[derive(Default)]
pub struct KaiascanClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl KaiascanClientBuilder {
    /// Switch to `network`'s base URL and chain ID.
    pub fn network(mut self, network: Network) -> Self {
        self.config = self.config.with_network(network);
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config = self.config.with_base_url(url);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.config = self.config.with_header(name, value);
        self
    }

    /// Replace the default header set wholesale.
    pub fn headers(mut self, headers: Headers) -> Self {
        self.config = self.config.with_headers(headers);
        self
    }

    pub fn api_key(mut self, token: &str) -> Self {
        self.config = self.config.with_api_key(token);
        self
    }

    /// Start from a fully prepared config, discarding earlier settings.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Request timeout for the default transport. Ignored when a transport
    /// is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> KaiascanResult<KaiascanClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.timeout)?,
        };
        Ok(KaiascanClient {
            api: ApiClient::new(transport),
            config: Arc::new(RwLock::new(Arc::new(self.config))),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Option<Duration>) -> KaiascanResult<Arc<dyn Transport>> {
    use crate::api::transport::ReqwestTransport;

    let transport = match timeout {
        Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
        None => ReqwestTransport::new()?,
    };
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Option<Duration>) -> KaiascanResult<Arc<dyn Transport>> {
    Err(KaiascanError::validation(
        "transport",
        "no transport given and the `http` feature is disabled",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorKind;
    use crate::api::transport::HttpResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        body: &'static str,
    }

    #[async_trait]
    impl Transport for Counting {
        async fn send(&self, _url: &str, _headers: &Headers) -> KaiascanResult<HttpResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(200, self.body))
        }
    }

    fn client(body: &'static str) -> (KaiascanClient, Arc<Counting>) {
        let transport = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            body,
        });
        let client = KaiascanClient::builder()
            .transport(transport.clone())
            .build()
            .unwrap();
        (client, transport)
    }

    #[test]
    fn test_builder_defaults_to_mainnet() {
        let (client, _) = client("{}");
        let config = tokio_test::block_on(client.config());
        assert_eq!(config.chain_id(), "8217");
        assert_eq!(config.network(), Some(Network::Mainnet));
    }

    #[test]
    fn test_builder_options() {
        let (_, transport) = client("{}");
        let client = KaiascanClient::builder()
            .network(Network::Testnet)
            .api_key("secret")
            .header("X-Trace", "1")
            .transport(transport)
            .build()
            .unwrap();
        let config = tokio_test::block_on(client.config());
        assert_eq!(config.base_url(), "https://kairos-oapi.kaiascan.io/");
        assert!(config.has_api_key());
        assert_eq!(config.headers().get("X-Trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_empty_contract_creators_rejected_locally() {
        let (client, transport) = client(r#"{"code":0,"data":[],"msg":"success"}"#);
        let err = tokio_test::block_on(client.get_contract_creators(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("contractAddresses"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_setters_replace_snapshot() {
        let (client, _) = client("{}");
        let before = tokio_test::block_on(client.config());

        tokio_test::block_on(client.set_network(Network::Testnet));
        let after = tokio_test::block_on(client.config());

        // The earlier snapshot is untouched.
        assert_eq!(before.chain_id(), "8217");
        assert_eq!(after.chain_id(), "1001");

        tokio_test::block_on(client.set_base_url("http://localhost:3000"));
        let custom = tokio_test::block_on(client.config());
        assert_eq!(custom.base_url(), "http://localhost:3000/");
        assert_eq!(custom.chain_id(), "1001");
    }

    #[test]
    fn test_set_header_keeps_other_headers() {
        let (client, _) = client("{}");
        let before = tokio_test::block_on(client.config());

        tokio_test::block_on(client.set_header("X-Trace", "abc"));
        tokio_test::block_on(client.set_header("X-Trace", "def"));
        let after = tokio_test::block_on(client.config());

        assert!(before.headers().get("X-Trace").is_none());
        assert_eq!(after.headers().get("X-Trace").map(String::as_str), Some("def"));
        assert_eq!(after.headers().len(), before.headers().len() + 1);
    }

    #[test]
    fn test_clones_share_config() {
        let (client, _) = client("{}");
        let other = client.clone();
        tokio_test::block_on(other.set_config(ClientConfig::testnet()));
        let config = tokio_test::block_on(client.config());
        assert_eq!(config.network(), Some(Network::Testnet));
    }
}
