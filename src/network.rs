//! Network presets for the Kaiascan open API.

use std::fmt;
use std::str::FromStr;

/// Mainnet open API base URL.
pub const MAINNET_API_URL: &str = "https://mainnet-oapi.kaiascan.io/";

/// Kairos testnet open API base URL.
pub const TESTNET_API_URL: &str = "https://kairos-oapi.kaiascan.io/";

/// Kaia mainnet chain ID.
pub const MAINNET_CHAIN_ID: &str = "8217";

/// Kairos testnet chain ID.
pub const TESTNET_CHAIN_ID: &str = "1001";

/// Which Kaia network the explorer API serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Network {
    #[default]
    Mainnet,
    /// Kairos
    Testnet,
}

impl Network {
    /// Pick a network from the legacy `isTestnet` flag.
    pub fn from_testnet_flag(is_testnet: bool) -> Self {
        if is_testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Look up a network by its chain ID.
    pub fn from_chain_id(chain_id: &str) -> Option<Self> {
        match chain_id {
            MAINNET_CHAIN_ID => Some(Network::Mainnet),
            TESTNET_CHAIN_ID => Some(Network::Testnet),
            _ => None,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_API_URL,
            Network::Testnet => TESTNET_API_URL,
        }
    }

    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_CHAIN_ID,
            Network::Testnet => TESTNET_CHAIN_ID,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "cypress" | MAINNET_CHAIN_ID => Ok(Network::Mainnet),
            "testnet" | "kairos" | TESTNET_CHAIN_ID => Ok(Network::Testnet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Network::Mainnet.base_url(), "https://mainnet-oapi.kaiascan.io/");
        assert_eq!(Network::Mainnet.chain_id(), "8217");
        assert_eq!(Network::Testnet.base_url(), "https://kairos-oapi.kaiascan.io/");
        assert_eq!(Network::Testnet.chain_id(), "1001");
        assert_eq!(Network::default(), Network::Mainnet);
    }

    #[test]
    fn test_from_testnet_flag() {
        assert_eq!(Network::from_testnet_flag(true), Network::Testnet);
        assert_eq!(Network::from_testnet_flag(false), Network::Mainnet);
    }

    #[test]
    fn test_parse() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Kairos".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("1001".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("8217".parse::<Network>().unwrap(), Network::Mainnet);
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_from_chain_id() {
        assert_eq!(Network::from_chain_id("8217"), Some(Network::Mainnet));
        assert_eq!(Network::from_chain_id("1001"), Some(Network::Testnet));
        assert_eq!(Network::from_chain_id("1"), None);
    }
}
