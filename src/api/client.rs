//! Request orchestration shared by every endpoint.
//!
//! [`ApiClient::invoke`] is the single path each call takes:
//!
//! 1. compose and validate the URL ([`QueryBuilder`]), failing before any I/O;
//! 2. issue one GET through the [`Transport`];
//! 3. reject non-2xx statuses without reading the body;
//! 4. unwrap the `{code, data, msg}` envelope into `T`.
//!
//! No retries, caching or coalescing happen here.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::config::ClientConfig;
use crate::api::endpoint::{EndpointSpec, RequestParams};
use crate::api::envelope;
use crate::api::error::{KaiascanError, KaiascanResult};
use crate::api::query::QueryBuilder;
use crate::api::transport::Transport;

/// Stateless request executor over a shared [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Compose the URL `invoke` would request, without sending anything.
    pub fn url(
        config: &ClientConfig,
        endpoint: &EndpointSpec,
        params: &RequestParams,
    ) -> KaiascanResult<String> {
        QueryBuilder::new(config.base_url()).build(endpoint, params)
    }

    /// Execute one call against `config`.
    ///
    /// `config` is the snapshot the whole call uses; nothing is re-read
    /// mid-flight.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        config: &ClientConfig,
        endpoint: &EndpointSpec,
        params: RequestParams,
    ) -> KaiascanResult<T> {
        let url = Self::url(config, endpoint, &params)?;

        tracing::debug!(
            endpoint = endpoint.name,
            chain_id = config.chain_id(),
            url = %url,
            "Sending request"
        );

        let response = self.transport.send(&url, &config.request_headers()).await?;

        if !response.is_success() {
            tracing::warn!(
                endpoint = endpoint.name,
                status = response.status,
                url = %url,
                "Request failed with non-success status"
            );
            return Err(KaiascanError::Transport {
                status: response.status,
                url,
            });
        }

        let data = envelope::decode(&response.body)?;
        tracing::debug!(endpoint = endpoint.name, "Request succeeded");
        Ok(data)
    }
}
