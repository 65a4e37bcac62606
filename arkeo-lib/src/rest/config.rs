//! Configuration for the REST query client.
//!
//! # Environment Variables
//!
//! - `ARKEO_API` - REST gateway URL (e.g., `http://localhost:1317`)
//! - `ARKEO_NETWORK` - Network name: `mainnet`, `testnet` or `localnet`
//! - `ARKEO_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `ARKEO_PAGE_LIMIT` - Page size for list queries (default: 100)

use serde::{Deserialize, Deserializer, Serialize};

/// Address of a locally running node's REST gateway.
pub const LOCALNET_API_URL: &str = "http://localhost:1317";

/// Native staking denomination.
pub const NATIVE_DENOM: &str = "uarkeo";

/// Arkeo network selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    /// Single-node development chain.
    Localnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Localnet => "localnet",
        }
    }

    /// Bech32 human readable part for account addresses.
    pub fn address_prefix(&self) -> &'static str {
        match self {
            Self::Mainnet => "arkeo",
            Self::Testnet | Self::Localnet => "tarkeo",
        }
    }

    /// Parse a network name, accepting a few common aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Some(Self::Mainnet),
            "testnet" | "test" => Some(Self::Testnet),
            "localnet" | "local" | "regtest" => Some(Self::Localnet),
            _ => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`RestClient`](super::RestClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConfig {
    /// REST gateway base URL.
    pub api_url: String,

    /// Network the gateway serves.
    #[serde(default)]
    pub network: Network,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Page size used when walking paginated lists.
    #[serde(default = "default_page_limit", deserialize_with = "at_least_one")]
    pub page_limit: u64,

    /// Upper bound on pages fetched by a single list walk.
    #[serde(default = "default_max_pages", deserialize_with = "at_least_one")]
    pub max_pages: usize,
}

fn default_timeout() -> u64 {
    30
}

fn default_page_limit() -> u64 {
    100
}

fn default_max_pages() -> usize {
    10_000
}

/// Same floor the builders apply: zero is read as one.
fn at_least_one<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Ord + From<u8>,
{
    Ok(T::deserialize(deserializer)?.max(T::from(1)))
}

impl RestConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            network: Network::default(),
            timeout_secs: default_timeout(),
            page_limit: default_page_limit(),
            max_pages: default_max_pages(),
        }
    }

    /// A node running on this machine.
    pub fn localnet() -> Self {
        Self::new(LOCALNET_API_URL).with_network(Network::Localnet)
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_page_limit(mut self, limit: u64) -> Self {
        self.page_limit = limit.max(1);
        self
    }

    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages.max(1);
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Falls back to [`RestConfig::localnet`] values for anything unset.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("ARKEO_API") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::localnet(),
        };

        if let Some(network) = std::env::var("ARKEO_NETWORK")
            .ok()
            .and_then(|s| Network::parse(&s))
        {
            config = config.with_network(network);
        }

        if let Ok(timeout) = std::env::var("ARKEO_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config = config.with_timeout(secs);
            }
        }

        if let Ok(limit) = std::env::var("ARKEO_PAGE_LIMIT") {
            if let Ok(limit) = limit.parse::<u64>() {
                config = config.with_page_limit(limit);
            }
        }

        config
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self::localnet()
    }
}
