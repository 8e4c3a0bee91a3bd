//! Every endpoint the SDK calls, as static [`EndpointSpec`]s.
//!
//! Paths are relative to the base URL. Paginated endpoints list `page` and
//! `size` first so they lead the query string.

use crate::api::endpoint::{block_number, directions, non_empty, EndpointSpec, QueryParam};

// ── Shared parameter declarations ────────────────────────────────────────────

const PAGE: QueryParam = QueryParam::optional("page");
const SIZE: QueryParam = QueryParam::optional("size");
const BLOCK_START: QueryParam =
    QueryParam::optional("blockNumberStart").with_validator(block_number);
const BLOCK_END: QueryParam = QueryParam::optional("blockNumberEnd").with_validator(block_number);
const TX_TYPE: QueryParam = QueryParam::optional("type");

const PAGED: &[QueryParam] = &[PAGE, SIZE];
const PAGED_BLOCK_RANGE: &[QueryParam] = &[PAGE, SIZE, BLOCK_START, BLOCK_END];

const ACCOUNT: &[&str] = &["accountAddress"];
const TOKEN: &[&str] = &["tokenAddress"];
const NFT: &[&str] = &["nftAddress"];
const BLOCK: &[&str] = &["blockNumber"];
const TRANSACTION: &[&str] = &["transactionHash"];

// =============================================================================
// Accounts
// =============================================================================

pub static ACCOUNT_INFO: EndpointSpec = EndpointSpec {
    name: "get_account",
    path: "api/v1/accounts/{accountAddress}",
    path_params: ACCOUNT,
    query_params: &[],
    paginated: false,
};

pub static ACCOUNT_KEY_HISTORIES: EndpointSpec = EndpointSpec {
    name: "get_account_key_histories",
    path: "api/v1/accounts/{accountAddress}/key-histories",
    path_params: ACCOUNT,
    query_params: PAGED,
    paginated: true,
};

pub static ACCOUNT_TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "get_account_transactions",
    path: "api/v1/accounts/{accountAddress}/transactions",
    path_params: ACCOUNT,
    query_params: &[
        PAGE,
        SIZE,
        BLOCK_START,
        BLOCK_END,
        TX_TYPE,
        QueryParam::optional("directions").with_validator(directions),
    ],
    paginated: true,
};

pub static ACCOUNT_TOKEN_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "get_account_token_transfers",
    path: "api/v1/accounts/{accountAddress}/token-transfers",
    path_params: ACCOUNT,
    query_params: &[
        PAGE,
        SIZE,
        QueryParam::optional("contractAddress"),
        BLOCK_START,
        BLOCK_END,
    ],
    paginated: true,
};

pub static ACCOUNT_NFT_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "get_account_nft_transfers",
    path: "api/v1/accounts/{accountAddress}/nft-transfers",
    path_params: ACCOUNT,
    query_params: &[
        PAGE,
        SIZE,
        QueryParam::optional("contractAddress"),
        BLOCK_START,
        BLOCK_END,
    ],
    paginated: true,
};

pub static ACCOUNT_TOKEN_BALANCES: EndpointSpec = EndpointSpec {
    name: "get_account_token_balances",
    path: "api/v1/accounts/{accountAddress}/token-details",
    path_params: ACCOUNT,
    query_params: PAGED,
    paginated: true,
};

pub static ACCOUNT_NFT_BALANCES: EndpointSpec = EndpointSpec {
    name: "get_account_nft_balances",
    path: "api/v1/accounts/{accountAddress}/nft-balances",
    path_params: ACCOUNT,
    query_params: PAGED,
    paginated: true,
};

pub static ACCOUNT_INTERNAL_TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "get_account_internal_transactions",
    path: "api/v1/accounts/{accountAddress}/internal-transactions",
    path_params: ACCOUNT,
    query_params: PAGED_BLOCK_RANGE,
    paginated: true,
};

// =============================================================================
// Tokens
// =============================================================================

pub static FUNGIBLE_TOKEN: EndpointSpec = EndpointSpec {
    name: "get_fungible_token",
    path: "api/v1/tokens",
    path_params: &[],
    query_params: &[QueryParam::required("tokenAddress")],
    paginated: false,
};

pub static TOKEN_HOLDERS: EndpointSpec = EndpointSpec {
    name: "get_token_holders",
    path: "api/v1/tokens/{tokenAddress}/holders",
    path_params: TOKEN,
    query_params: PAGED,
    paginated: true,
};

pub static TOKEN_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "get_token_transfers",
    path: "api/v1/tokens/{tokenAddress}/transfers",
    path_params: TOKEN,
    query_params: PAGED_BLOCK_RANGE,
    paginated: true,
};

pub static TOKEN_BURNS: EndpointSpec = EndpointSpec {
    name: "get_token_burns",
    path: "api/v1/tokens/{tokenAddress}/burns",
    path_params: TOKEN,
    query_params: PAGED_BLOCK_RANGE,
    paginated: true,
};

pub static TOKEN_SEARCH: EndpointSpec = EndpointSpec {
    name: "search_tokens",
    path: "api/v1/tokens/search",
    path_params: &[],
    query_params: &[
        PAGE,
        SIZE,
        QueryParam::required("keyword").with_validator(non_empty),
    ],
    paginated: true,
};

// =============================================================================
// NFTs
// =============================================================================

pub static NFT_ITEM: EndpointSpec = EndpointSpec {
    name: "get_nft_item",
    path: "api/v1/nfts",
    path_params: &[],
    query_params: &[
        QueryParam::required("nftAddress"),
        QueryParam::required("tokenId"),
    ],
    paginated: false,
};

pub static NFT_COLLECTION: EndpointSpec = EndpointSpec {
    name: "get_nft",
    path: "api/v1/nfts/{nftAddress}",
    path_params: NFT,
    query_params: &[],
    paginated: false,
};

pub static NFT_INVENTORY: EndpointSpec = EndpointSpec {
    name: "get_nft_inventory",
    path: "api/v1/nfts/{nftAddress}/inventory",
    path_params: NFT,
    query_params: &[
        PAGE,
        SIZE,
        QueryParam::optional("holderAddress"),
        QueryParam::optional("tokenId"),
    ],
    paginated: true,
};

pub static NFT_HOLDERS: EndpointSpec = EndpointSpec {
    name: "get_nft_holders",
    path: "api/v1/nfts/{nftAddress}/holders",
    path_params: NFT,
    query_params: PAGED,
    paginated: true,
};

pub static NFT_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "get_nft_transfers",
    path: "api/v1/nfts/{nftAddress}/transfers",
    path_params: NFT,
    query_params: &[
        PAGE,
        SIZE,
        QueryParam::optional("tokenId"),
        BLOCK_START,
        BLOCK_END,
    ],
    paginated: true,
};

// =============================================================================
// Blocks
// =============================================================================

pub static LATEST_BLOCK: EndpointSpec = EndpointSpec {
    name: "get_latest_block",
    path: "api/v1/blocks/latest",
    path_params: &[],
    query_params: &[],
    paginated: false,
};

pub static BLOCK_BY_NUMBER: EndpointSpec = EndpointSpec {
    name: "get_block",
    path: "api/v1/blocks",
    path_params: &[],
    query_params: &[QueryParam::required("blockNumber").with_validator(block_number)],
    paginated: false,
};

pub static BLOCK_LIST: EndpointSpec = EndpointSpec {
    name: "get_blocks",
    path: "api/v1/blocks",
    path_params: &[],
    query_params: PAGED_BLOCK_RANGE,
    paginated: true,
};

pub static BLOCK_TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "get_transactions_of_block",
    path: "api/v1/blocks/{blockNumber}/transactions",
    path_params: BLOCK,
    query_params: &[PAGE, SIZE, TX_TYPE],
    paginated: true,
};

pub static BLOCK_REWARDS: EndpointSpec = EndpointSpec {
    name: "get_block_rewards",
    path: "api/v1/blocks/{blockNumber}/rewards",
    path_params: BLOCK,
    query_params: &[],
    paginated: false,
};

pub static BLOCK_INTERNAL_TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "get_internal_transactions_of_block",
    path: "api/v1/blocks/{blockNumber}/internal-transactions",
    path_params: BLOCK,
    query_params: PAGED,
    paginated: true,
};

// =============================================================================
// Transactions
// =============================================================================

pub static TRANSACTION_INFO: EndpointSpec = EndpointSpec {
    name: "get_transaction",
    path: "api/v1/transactions/{transactionHash}",
    path_params: TRANSACTION,
    query_params: &[],
    paginated: false,
};

pub static TRANSACTION_STATUS: EndpointSpec = EndpointSpec {
    name: "get_transaction_status",
    path: "api/v1/transactions/{transactionHash}/status",
    path_params: TRANSACTION,
    query_params: &[],
    paginated: false,
};

pub static TRANSACTION_RECEIPT_STATUS: EndpointSpec = EndpointSpec {
    name: "get_transaction_receipt_status",
    path: "api/v1/transaction-receipts/status",
    path_params: &[],
    query_params: &[QueryParam::required("transactionHash")],
    paginated: false,
};

pub static TRANSACTION_TOKEN_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "get_transaction_token_transfers",
    path: "api/v1/transactions/{transactionHash}/token-transfers",
    path_params: TRANSACTION,
    query_params: PAGED,
    paginated: true,
};

pub static TRANSACTION_NFT_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "get_transaction_nft_transfers",
    path: "api/v1/transactions/{transactionHash}/nft-transfers",
    path_params: TRANSACTION,
    query_params: PAGED,
    paginated: true,
};

pub static TRANSACTION_EVENT_LOGS: EndpointSpec = EndpointSpec {
    name: "get_transaction_event_logs",
    path: "api/v1/transactions/{transactionHash}/event-logs",
    path_params: TRANSACTION,
    query_params: &[PAGE, SIZE, QueryParam::optional("signature")],
    paginated: true,
};

pub static TRANSACTION_INTERNAL_TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "get_transaction_internal_transactions",
    path: "api/v1/transactions/{transactionHash}/internal-transactions",
    path_params: TRANSACTION,
    query_params: PAGED,
    paginated: true,
};

// =============================================================================
// Contracts
// =============================================================================

pub static CONTRACT_SOURCE_CODE: EndpointSpec = EndpointSpec {
    name: "get_contract_source_code",
    path: "api/v1/contracts/source-code",
    path_params: &[],
    query_params: &[QueryParam::required("contractAddress")],
    paginated: false,
};

pub static CONTRACT_CREATION_CODE: EndpointSpec = EndpointSpec {
    name: "get_contract_creation_code",
    path: "api/v1/contracts/creation-code",
    path_params: &[],
    query_params: &[QueryParam::required("contractAddress")],
    paginated: false,
};

pub static CONTRACT_CREATORS: EndpointSpec = EndpointSpec {
    name: "get_contract_creators",
    path: "api/v1/contracts/creators",
    path_params: &[],
    query_params: &[QueryParam::required("contractAddresses").with_validator(non_empty)],
    paginated: false,
};

/// All endpoints, for introspection and consistency checks.
pub static ALL: &[&EndpointSpec] = &[
    &ACCOUNT_INFO,
    &ACCOUNT_KEY_HISTORIES,
    &ACCOUNT_TRANSACTIONS,
    &ACCOUNT_TOKEN_TRANSFERS,
    &ACCOUNT_NFT_TRANSFERS,
    &ACCOUNT_TOKEN_BALANCES,
    &ACCOUNT_NFT_BALANCES,
    &ACCOUNT_INTERNAL_TRANSACTIONS,
    &FUNGIBLE_TOKEN,
    &TOKEN_HOLDERS,
    &TOKEN_TRANSFERS,
    &TOKEN_BURNS,
    &TOKEN_SEARCH,
    &NFT_ITEM,
    &NFT_COLLECTION,
    &NFT_INVENTORY,
    &NFT_HOLDERS,
    &NFT_TRANSFERS,
    &LATEST_BLOCK,
    &BLOCK_BY_NUMBER,
    &BLOCK_LIST,
    &BLOCK_TRANSACTIONS,
    &BLOCK_REWARDS,
    &BLOCK_INTERNAL_TRANSACTIONS,
    &TRANSACTION_INFO,
    &TRANSACTION_STATUS,
    &TRANSACTION_RECEIPT_STATUS,
    &TRANSACTION_TOKEN_TRANSFERS,
    &TRANSACTION_NFT_TRANSFERS,
    &TRANSACTION_EVENT_LOGS,
    &TRANSACTION_INTERNAL_TRANSACTIONS,
    &CONTRACT_SOURCE_CODE,
    &CONTRACT_CREATION_CODE,
    &CONTRACT_CREATORS,
];
