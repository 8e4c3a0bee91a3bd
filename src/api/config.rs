//! Per-client configuration: base URL, headers, chain selection.

use std::collections::BTreeMap;

use crate::network::Network;

/// Header name → value.
pub type Headers = BTreeMap<String, String>;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Environment variable holding the API key read by [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "KAIASCAN_API_KEY";

/// Environment variable overriding the base URL in [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "KAIASCAN_BASE_URL";

/// Immutable configuration snapshot.
///
/// The client swaps whole values of this type; a call reads one snapshot at
/// its start and uses it until it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    headers: Headers,
    chain_id: String,
    network: Option<Network>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_network(Network::Mainnet)
    }
}

impl ClientConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            base_url: network.base_url().to_string(),
            headers: default_headers(),
            chain_id: network.chain_id().to_string(),
            network: Some(network),
        }
    }

    pub fn mainnet() -> Self {
        Self::for_network(Network::Mainnet)
    }

    pub fn testnet() -> Self {
        Self::for_network(Network::Testnet)
    }

    /// Preset for `network`, with the API key and base URL taken from the
    /// environment when set.
    pub fn from_env(network: Network) -> Self {
        let mut config = Self::for_network(network);
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config = config.with_api_key(key.trim());
            }
        }
        config
    }

    /// Override the base URL. A missing trailing `/` is added.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    /// Replace the header set wholesale.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Add or overwrite a single header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Send `Authorization: Bearer <token>`.
    pub fn with_api_key(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_header(AUTHORIZATION, value)
    }

    /// Switch base URL and chain ID to `network`'s presets. Headers are kept.
    pub fn with_network(mut self, network: Network) -> Self {
        self.base_url = network.base_url().to_string();
        self.chain_id = network.chain_id().to_string();
        self.network = Some(network);
        self
    }

    /// Override the chain ID. The network becomes whatever the ID maps to.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = chain_id.into();
        self.network = Network::from_chain_id(&self.chain_id);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// `None` when the chain ID matches no built-in network.
    pub fn network(&self) -> Option<Network> {
        self.network
    }

    pub fn has_api_key(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    /// Headers as sent on the wire: the configured set, plus
    /// `Content-Type: application/json` when the set lacks one.
    pub fn request_headers(&self) -> Headers {
        let mut headers = self.headers.clone();
        let has_content_type = headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE));
        if !has_content_type {
            headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        }
        headers
    }
}

fn default_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
    headers
}

fn normalize_base_url(url: String) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let config = ClientConfig::mainnet();
        assert_eq!(config.base_url(), "https://mainnet-oapi.kaiascan.io/");
        assert_eq!(config.chain_id(), "8217");
        assert_eq!(config.network(), Some(Network::Mainnet));
        assert_eq!(
            config.headers().get(CONTENT_TYPE).map(String::as_str),
            Some(JSON_CONTENT_TYPE)
        );
        assert!(!config.has_api_key());

        let config = ClientConfig::testnet();
        assert_eq!(config.base_url(), "https://kairos-oapi.kaiascan.io/");
        assert_eq!(config.chain_id(), "1001");
        assert_eq!(ClientConfig::default(), ClientConfig::mainnet());
    }

    #[test]
    fn test_base_url_normalized() {
        let config = ClientConfig::mainnet().with_base_url("http://localhost:8080");
        assert_eq!(config.base_url(), "http://localhost:8080/");

        let config = ClientConfig::mainnet().with_base_url("http://localhost:8080///");
        assert_eq!(config.base_url(), "http://localhost:8080/");
    }

    #[test]
    fn test_api_key_header() {
        let config = ClientConfig::mainnet().with_api_key("secret");
        assert!(config.has_api_key());
        assert_eq!(
            config.headers().get(AUTHORIZATION).map(String::as_str),
            Some("Bearer secret")
        );
    }

    #[test]
    fn test_with_headers_replaces_wholesale() {
        let mut custom = Headers::new();
        custom.insert("X-Trace".to_string(), "1".to_string());
        let config = ClientConfig::mainnet()
            .with_api_key("secret")
            .with_headers(custom);

        assert_eq!(config.headers().len(), 1);
        assert!(!config.has_api_key());

        // Content-Type is still sent.
        let sent = config.request_headers();
        assert_eq!(sent.get(CONTENT_TYPE).map(String::as_str), Some(JSON_CONTENT_TYPE));
        assert_eq!(sent.get("X-Trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_request_headers_keeps_caller_content_type() {
        let config = ClientConfig::mainnet()
            .with_headers(Headers::new())
            .with_header("content-type", "application/json; charset=utf-8");
        let sent = config.request_headers();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent.get("content-type").map(String::as_str),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn test_with_network_keeps_headers() {
        let config = ClientConfig::mainnet()
            .with_api_key("secret")
            .with_network(Network::Testnet);
        assert_eq!(config.base_url(), Network::Testnet.base_url());
        assert_eq!(config.chain_id(), "1001");
        assert!(config.has_api_key());
    }

    #[test]
    fn test_with_chain_id() {
        let config = ClientConfig::mainnet().with_chain_id("1001");
        assert_eq!(config.network(), Some(Network::Testnet));
        let config = ClientConfig::mainnet().with_chain_id("31337");
        assert_eq!(config.network(), None);
    }
}
