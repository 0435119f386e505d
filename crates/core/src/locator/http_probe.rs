//! reqwest-backed locator probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::LOCATION, redirect, Client};
use tracing::debug;

use crate::config::ResolverConfig;

use super::{LocatorError, LocatorProbe, ProbeResponse};

/// Build the HTTP client used for tracing download links.
///
/// Redirects are never followed: a redirect to a magnet URI is the answer,
/// not something to fetch.
pub fn build_http_client(config: &ResolverConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .redirect(redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
}

/// Probe that issues real HTTP requests through an injected client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Wrap a configured client. See [`build_http_client`].
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocatorProbe for HttpProbe {
    fn name(&self) -> &str {
        "http"
    }

    async fn probe(&self, url: &str) -> Result<ProbeResponse, LocatorError> {
        debug!(url = %url, "Tracing download link");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LocatorError::Timeout {
                    url: url.to_string(),
                }
            } else {
                LocatorError::unresolvable(url, e.to_string())
            }
        })?;

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        debug!(url = %url, status = %status, "Got response for download link");

        let body = if status.is_client_error() || status.is_server_error() {
            response.text().await.unwrap_or_default()
        } else {
            String::new()
        };

        Ok(ProbeResponse {
            status: status.as_u16(),
            location,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client_with_defaults() {
        let client = build_http_client(&ResolverConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_probe_connection_refused_is_unresolvable() {
        let client = build_http_client(&ResolverConfig {
            timeout_secs: 2,
            connect_timeout_secs: 1,
            max_concurrent: 1,
        })
        .unwrap();
        let probe = HttpProbe::new(client);

        // Port 1 on localhost is reserved and should refuse connections.
        let err = probe.probe("http://127.0.0.1:1/dl/x").await.unwrap_err();
        assert_eq!(err.url(), "http://127.0.0.1:1/dl/x");
    }
}
