//! Locator resolver: magnet short-circuit, host rewriting, redirect tracing.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Url};
use tracing::debug;

use crate::config::IndexerSettings;
use crate::metrics;

use super::http_probe::HttpProbe;
use super::{LocatorError, LocatorProbe, SearchResult};

/// Whether `url` is a magnet URI.
pub fn is_magnet_url(url: &str) -> bool {
    url.starts_with("magnet:")
}

/// Point an indexer-hosted link at the configured aggregator host and port.
///
/// Scheme, path and query are kept as they are. Applying the rewrite twice
/// gives the same URL as applying it once.
pub fn rewrite_indexer_host(link: &str, settings: &IndexerSettings) -> Result<String, LocatorError> {
    let mut url =
        Url::parse(link).map_err(|e| LocatorError::unresolvable(link, format!("invalid link: {}", e)))?;

    url.set_host(Some(settings.host.as_str()))
        .map_err(|e| LocatorError::unresolvable(link, format!("invalid indexer host: {}", e)))?;
    url.set_port(Some(settings.port))
        .map_err(|_| LocatorError::unresolvable(link, "link cannot carry a port"))?;

    Ok(url.to_string())
}

/// Resolves search results into fetchable download locators.
///
/// Cheap to clone; the probe and settings are shared.
#[derive(Clone)]
pub struct LocatorResolver {
    probe: Arc<dyn LocatorProbe>,
    settings: Arc<IndexerSettings>,
}

impl std::fmt::Debug for LocatorResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocatorResolver")
            .field("probe", &self.probe.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl LocatorResolver {
    /// Create a resolver that probes links with the given HTTP client.
    ///
    /// The client should have redirects disabled and a bounded timeout,
    /// see [`super::build_http_client`].
    pub fn new(client: Client, settings: IndexerSettings) -> Self {
        Self::with_probe(Arc::new(HttpProbe::new(client)), settings)
    }

    /// Create a resolver around any probe implementation.
    pub fn with_probe(probe: Arc<dyn LocatorProbe>, settings: IndexerSettings) -> Self {
        Self {
            probe,
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &IndexerSettings {
        &self.settings
    }

    /// Resolve a search result, preferring its magnet URI.
    pub async fn resolve_result(&self, result: &SearchResult) -> Result<String, LocatorError> {
        self.resolve(&result.link, result.magnet()).await
    }

    /// Resolve a download locator.
    ///
    /// A non-empty `magnet_uri` is returned as is, without any request.
    /// Otherwise the link is rewritten to the indexer host and probed once:
    /// a redirect to a magnet URI yields that magnet, any other non-error
    /// response yields the rewritten link itself.
    pub async fn resolve(
        &self,
        link: &str,
        magnet_uri: Option<&str>,
    ) -> Result<String, LocatorError> {
        if let Some(magnet) = magnet_uri.filter(|m| !m.is_empty()) {
            record_outcome("magnet");
            return Ok(magnet.to_string());
        }

        if is_magnet_url(link) {
            record_outcome("magnet");
            return Ok(link.to_string());
        }

        let result = self.trace(link).await;
        if result.is_err() {
            record_outcome("failed");
        }
        result
    }

    async fn trace(&self, link: &str) -> Result<String, LocatorError> {
        let url = rewrite_indexer_host(link, &self.settings)?;

        let start = Instant::now();
        let probed = self.probe.probe(&url).await;
        metrics::LOCATOR_PROBE_DURATION
            .with_label_values(&[if probed.is_ok() { "success" } else { "error" }])
            .observe(start.elapsed().as_secs_f64());

        let response = probed?;

        if !response.is_ok() {
            return Err(LocatorError::unresolvable(
                &url,
                format!(
                    "HTTP {}: {}",
                    response.status,
                    response.body.chars().take(200).collect::<String>()
                ),
            ));
        }

        if response.is_redirect() {
            if let Some(location) = response.location.as_deref().filter(|l| is_magnet_url(l)) {
                debug!(url = %url, "Download link redirects to magnet");
                record_outcome("redirect_magnet");
                return Ok(location.to_string());
            }
        }

        record_outcome("direct_url");
        Ok(url)
    }
}

fn record_outcome(outcome: &str) {
    metrics::LOCATOR_RESOLUTIONS
        .with_label_values(&[outcome])
        .inc();
}
