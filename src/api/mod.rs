//! Request/response core for the Kaiascan open API.
//!
//! Every endpoint goes through the same path: an [`EndpointSpec`] plus
//! per-call [`RequestParams`] are turned into a URL by [`QueryBuilder`],
//! sent through a [`Transport`], and the `{code, data, msg}` envelope is
//! unwrapped by [`envelope::decode`]. [`ApiClient`] wires these together.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kaiascan::api::{routes, ApiClient, ClientConfig, RequestParams, ReqwestTransport, TokenInfo};
//!
//! let api = ApiClient::new(Arc::new(ReqwestTransport::new()?));
//! let config = ClientConfig::mainnet().with_api_key("my-key");
//!
//! let token: TokenInfo = api
//!     .invoke(
//!         &config,
//!         &routes::FUNGIBLE_TOKEN,
//!         RequestParams::new().with("tokenAddress", "0x..."),
//!     )
//!     .await?;
//! ```
//!
//! # Error Handling
//!
//! All calls return [`KaiascanResult<T>`]. Branch on the variant, or on
//! [`KaiascanError::kind`]:
//!
//! ```rust,ignore
//! use kaiascan::api::KaiascanError;
//!
//! match client.get_transaction("0x...").await {
//!     Ok(tx) => println!("status: {:?}", tx.status),
//!     Err(KaiascanError::Transport { status: 404, .. }) => println!("no such transaction"),
//!     Err(KaiascanError::Api { code, msg, .. }) => println!("rejected ({}): {}", code, msg),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod query;
pub mod routes;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::{ClientConfig, Headers};
pub use endpoint::{EndpointSpec, Pagination, ParamValue, QueryParam, RequestParams};
pub use envelope::ApiEnvelope;
pub use error::{ErrorKind, KaiascanError, KaiascanResult};
pub use query::QueryBuilder;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpResponse, Transport};
pub use types::*;
