//! Types for locator resolution.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A raw result from the indexer aggregator.
///
/// Field names follow the aggregator's JSON response (`Title`, `Link`,
/// `MagnetUri`, `Seeders`). Other upstream fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    #[serde(rename = "Title")]
    pub title: String,
    /// Indexer-hosted download link.
    #[serde(rename = "Link", default, deserialize_with = "null_as_default")]
    pub link: String,
    /// Magnet URI, when the indexer provides one. May be empty upstream.
    #[serde(rename = "MagnetUri", default)]
    pub magnet_uri: Option<String>,
    #[serde(rename = "Seeders", default, deserialize_with = "seeders_count")]
    pub seeders: u32,
}

impl SearchResult {
    /// The magnet URI, treating an empty string the same as a missing one.
    pub fn magnet(&self) -> Option<&str> {
        self.magnet_uri.as_deref().filter(|m| !m.is_empty())
    }
}

/// A search result with a confirmed download locator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedResult {
    #[serde(flatten)]
    pub result: SearchResult,
    /// Magnet URI or http(s) .torrent URL. Never empty.
    pub torrent_url: String,
}

impl ResolvedResult {
    pub fn title(&self) -> &str {
        &self.result.title
    }

    pub fn seeders(&self) -> u32 {
        self.result.seeders
    }
}

/// Response envelope returned by the aggregator's results endpoint.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct AggregatorResponse {
    #[serde(default)]
    Results: Vec<SearchResult>,
}

/// Parse the aggregator's JSON results body into search results.
pub fn parse_search_results(body: &str) -> Result<Vec<SearchResult>, serde_json::Error> {
    let response: AggregatorResponse = serde_json::from_str(body)?;
    Ok(response.Results)
}

/// Raw outcome of probing a download link without following redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// `Location` header, if present.
    pub location: Option<String>,
    /// Response body. Only captured for error statuses.
    pub body: String,
}

impl ProbeResponse {
    /// Anything below 400 counts as success; redirects included.
    pub fn is_ok(&self) -> bool {
        self.status < 400
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status) && self.location.is_some()
    }
}

/// Errors that can occur while resolving a download locator.
///
/// Every variant means the candidate's locator is unresolvable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Unresolvable locator {url}: {reason}")]
    Unresolvable { url: String, reason: String },

    #[error("Timed out tracing {url}")]
    Timeout { url: String },
}

impl LocatorError {
    pub fn unresolvable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unresolvable {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// The link that failed to resolve.
    pub fn url(&self) -> &str {
        match self {
            Self::Unresolvable { url, .. } | Self::Timeout { url } => url,
        }
    }
}

/// Issues a single GET against a download link with redirects disabled.
#[async_trait]
pub trait LocatorProbe: Send + Sync {
    /// Probe name for logging.
    fn name(&self) -> &str;

    /// Fetch `url` once, without following redirects.
    async fn probe(&self, url: &str) -> Result<ProbeResponse, LocatorError>;
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn seeders_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(raw.clamp(0, u32::MAX as i64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_aggregator_fields() {
        let json = r#"{
            "Title": "Rambo 1982 1080p",
            "Link": "http://jackett:9117/dl/rarbg/?jackett_apikey=x&path=abc",
            "MagnetUri": null,
            "Seeders": 42,
            "Peers": 50,
            "Size": 123456
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.title, "Rambo 1982 1080p");
        assert!(result.link.starts_with("http://jackett:9117/dl/"));
        assert!(result.magnet_uri.is_none());
        assert_eq!(result.seeders, 42);
    }

    #[test]
    fn test_empty_and_missing_magnet_are_equivalent() {
        let empty: SearchResult =
            serde_json::from_str(r#"{"Title": "a", "Link": "http://x/1", "MagnetUri": ""}"#)
                .unwrap();
        let missing: SearchResult =
            serde_json::from_str(r#"{"Title": "a", "Link": "http://x/1"}"#).unwrap();

        assert_eq!(empty.magnet(), None);
        assert_eq!(missing.magnet(), None);
    }

    #[test]
    fn test_magnet_present() {
        let result: SearchResult = serde_json::from_str(
            r#"{"Title": "a", "Link": null, "MagnetUri": "magnet:?xt=urn:btih:abc"}"#,
        )
        .unwrap();

        assert_eq!(result.magnet(), Some("magnet:?xt=urn:btih:abc"));
        assert!(result.link.is_empty());
    }

    #[test]
    fn test_seeders_null_and_negative() {
        let null: SearchResult =
            serde_json::from_str(r#"{"Title": "a", "Seeders": null}"#).unwrap();
        let negative: SearchResult =
            serde_json::from_str(r#"{"Title": "a", "Seeders": -3}"#).unwrap();

        assert_eq!(null.seeders, 0);
        assert_eq!(negative.seeders, 0);
    }

    #[test]
    fn test_parse_search_results() {
        let body = r#"{
            "Results": [
                {"Title": "one", "Link": "http://x/1", "Seeders": 1},
                {"Title": "two", "MagnetUri": "magnet:?xt=urn:btih:2", "Seeders": 2}
            ],
            "Indexers": []
        }"#;
        let results = parse_search_results(body).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "one");
        assert_eq!(results[1].magnet(), Some("magnet:?xt=urn:btih:2"));
    }

    #[test]
    fn test_resolved_result_serializes_flat() {
        let resolved = ResolvedResult {
            result: SearchResult {
                title: "one".to_string(),
                link: "http://x/1".to_string(),
                magnet_uri: None,
                seeders: 7,
            },
            torrent_url: "http://x/1".to_string(),
        };

        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["Title"], "one");
        assert_eq!(json["Seeders"], 7);
        assert_eq!(json["torrent_url"], "http://x/1");
    }

    #[test]
    fn test_probe_response_status_classes() {
        let redirect = ProbeResponse {
            status: 302,
            location: Some("magnet:?xt=urn:btih:abc".to_string()),
            body: String::new(),
        };
        assert!(redirect.is_ok());
        assert!(redirect.is_redirect());

        let not_found = ProbeResponse {
            status: 404,
            location: None,
            body: "gone".to_string(),
        };
        assert!(!not_found.is_ok());
        assert!(!not_found.is_redirect());

        let bare_redirect = ProbeResponse {
            status: 301,
            location: None,
            body: String::new(),
        };
        assert!(!bare_redirect.is_redirect());
    }

    #[test]
    fn test_locator_error_url() {
        let err = LocatorError::unresolvable("http://x/1", "HTTP 500");
        assert_eq!(err.url(), "http://x/1");
        assert!(err.to_string().contains("HTTP 500"));

        let timeout = LocatorError::Timeout {
            url: "http://x/2".to_string(),
        };
        assert_eq!(timeout.url(), "http://x/2");
    }
}
