//! CLI configuration
//!
//! Settings are layered: the TOML file is read first, `ARKEO_*` environment
//! variables override it, and command-line flags override both. Anything left
//! unset falls back to the localnet gateway.

use anyhow::{anyhow, Context, Result};
use arkeo_lib::rest::{Network, RestConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Partial configuration; `None` means "not set at this layer".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,
}

/// `<config_dir>/arkeo/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arkeo").join("config.toml"))
}

impl CliConfig {
    /// Load a config file. A missing file yields an empty layer.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Write this layer to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Read the `ARKEO_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a layer from any key lookup. Blank and unparsable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_url: get("ARKEO_API"),
            network: get("ARKEO_NETWORK"),
            timeout_secs: get("ARKEO_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
            page_limit: get("ARKEO_PAGE_LIMIT").and_then(|v| v.parse().ok()),
            max_pages: get("ARKEO_MAX_PAGES").and_then(|v| v.parse().ok()),
        }
    }

    /// Values set in `other` win over values in `self`.
    pub fn overlay(self, other: CliConfig) -> CliConfig {
        CliConfig {
            api_url: other.api_url.or(self.api_url),
            network: other.network.or(self.network),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            page_limit: other.page_limit.or(self.page_limit),
            max_pages: other.max_pages.or(self.max_pages),
        }
    }

    /// Resolve into a client configuration.
    pub fn into_rest_config(self) -> Result<RestConfig> {
        let network = self
            .network
            .as_deref()
            .map(|name| {
                Network::parse(name).ok_or_else(|| {
                    anyhow!("Unknown network '{}' (expected mainnet, testnet or localnet)", name)
                })
            })
            .transpose()?;

        let mut config = match self.api_url {
            Some(url) => RestConfig::new(url.trim_end_matches('/')),
            None => RestConfig::localnet(),
        };
        if let Some(network) = network {
            config = config.with_network(network);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(secs);
        }
        if let Some(limit) = self.page_limit {
            config = config.with_page_limit(limit);
        }
        if let Some(pages) = self.max_pages {
            config = config.with_max_pages(pages);
        }
        Ok(config)
    }
}

/// File layer, then environment, then `flags`.
pub fn resolve(path: Option<&Path>, flags: CliConfig) -> Result<RestConfig> {
    let file = match path {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    file.overlay(CliConfig::from_env())
        .overlay(flags)
        .into_rest_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_layer_is_localnet() {
        let config = CliConfig::default().into_rest_config().unwrap();
        assert_eq!(config, RestConfig::localnet());
    }

    #[test]
    fn test_env_lookup() {
        let layer = CliConfig::from_lookup(lookup(&[
            ("ARKEO_API", " http://node:1317 "),
            ("ARKEO_NETWORK", "testnet"),
            ("ARKEO_TIMEOUT_SECS", "5"),
            ("ARKEO_PAGE_LIMIT", "not-a-number"),
        ]));
        assert_eq!(layer.api_url.as_deref(), Some("http://node:1317"));
        assert_eq!(layer.network.as_deref(), Some("testnet"));
        assert_eq!(layer.timeout_secs, Some(5));
        assert_eq!(layer.page_limit, None);
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let layer = CliConfig::from_lookup(lookup(&[("ARKEO_API", "   ")]));
        assert!(layer.api_url.is_none());
    }

    #[test]
    fn test_overlay_precedence() {
        let file = CliConfig {
            api_url: Some("http://file:1317".into()),
            timeout_secs: Some(10),
            ..Default::default()
        };
        let flags = CliConfig {
            api_url: Some("http://flag:1317".into()),
            ..Default::default()
        };
        let merged = file.overlay(flags);
        assert_eq!(merged.api_url.as_deref(), Some("http://flag:1317"));
        assert_eq!(merged.timeout_secs, Some(10));
    }

    #[test]
    fn test_into_rest_config() {
        let config = CliConfig {
            api_url: Some("http://node:1317/".into()),
            network: Some("test".into()),
            page_limit: Some(0),
            ..Default::default()
        }
        .into_rest_config()
        .unwrap();

        assert_eq!(config.api_url, "http://node:1317");
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.page_limit, 1);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_unknown_network_rejected() {
        let result = CliConfig {
            network: Some("moonnet".into()),
            ..Default::default()
        }
        .into_rest_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = CliConfig {
            api_url: Some("http://node:1317".into()),
            network: Some("localnet".into()),
            max_pages: Some(3),
            ..Default::default()
        };

        config.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("api_url"));
        assert!(!text.contains("timeout_secs"));

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = CliConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }
}
