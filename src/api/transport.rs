//! The network boundary: one GET per call.
//!
//! [`Transport`] is the seam for swapping the HTTP stack (or stubbing it in
//! tests). Implementations only report what happened on the wire; status
//! classification and body decoding live in [`ApiClient`](crate::api::ApiClient).

use async_trait::async_trait;

use crate::api::config::Headers;
use crate::api::error::KaiascanResult;

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET. No retries.
///
/// Errors are reserved for requests that produced no response at all
/// ([`KaiascanError::Connection`](crate::api::KaiascanError::Connection));
/// any status code, 2xx or not, comes back as an [`HttpResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, headers: &Headers) -> KaiascanResult<HttpResponse>;
}

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
    use reqwest::Client;

    use super::{HttpResponse, Transport};
    use crate::api::config::Headers;
    use crate::api::error::{KaiascanError, KaiascanResult};

    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// [`Transport`] backed by a pooled `reqwest` client.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> KaiascanResult<Self> {
            Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        }

        pub fn with_timeout(timeout: Duration) -> KaiascanResult<Self> {
            let client = Client::builder()
                .timeout(timeout)
                .pool_max_idle_per_host(10)
                .build()
                .map_err(|e| KaiascanError::Connection {
                    url: String::new(),
                    source: Box::new(e),
                })?;
            Ok(Self { client })
        }

        /// Wrap an existing client, e.g. one with a proxy configured.
        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    fn header_map(headers: &Headers) -> KaiascanResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                KaiascanError::validation("headers", format!("invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                KaiascanError::validation("headers", format!("invalid value for '{}': {}", name, e))
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, url: &str, headers: &Headers) -> KaiascanResult<HttpResponse> {
            let headers = header_map(headers)?;
            let connection_error = |e: reqwest::Error| KaiascanError::Connection {
                url: url.to_string(),
                source: Box::new(e),
            };

            let response = self
                .client
                .get(url)
                .headers(headers)
                .send()
                .await
                .map_err(connection_error)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(connection_error)?;

            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(HttpResponse::new(200, "{}").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "nope").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
