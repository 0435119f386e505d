use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub indexer: IndexerSettings,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Connection parameters for the indexer aggregator (Jackett).
///
/// Only `host` and `port` are used by the resolver, to rewrite the host of
/// indexer-hosted download links.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct IndexerSettings {
    pub host: String,
    pub port: u16,
    /// Aggregator API token
    #[serde(default)]
    pub api_token: String,
}

/// Locator resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Request timeout in seconds for tracing a download link (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Maximum candidates resolved concurrently (default: 4)
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_concurrent() -> usize {
    4
}

/// Sanitized config for logging and diagnostics (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub indexer: SanitizedIndexerSettings,
    pub resolver: ResolverConfig,
}

/// Sanitized indexer settings (API token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedIndexerSettings {
    pub host: String,
    pub port: u16,
    pub api_token_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            indexer: SanitizedIndexerSettings {
                host: config.indexer.host.clone(),
                port: config.indexer.port,
                api_token_configured: !config.indexer.api_token.is_empty(),
            },
            resolver: config.resolver.clone(),
        }
    }
}
