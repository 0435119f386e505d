//! Mock locator probe for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::locator::{LocatorError, LocatorProbe, ProbeResponse};

type ScriptedResponse = Result<ProbeResponse, LocatorError>;

/// Mock implementation of the LocatorProbe trait.
///
/// Provides controllable behavior for testing:
/// - Scripted responses per URL (status, `Location`, body)
/// - Injected network failures and timeouts
/// - Per-URL delays, with tracking of peak concurrency
/// - Recorded requests for assertions
///
/// URLs without a scripted response answer `200 OK`.
///
/// # Example
///
/// ```rust,ignore
/// use mediagrab_core::testing::MockLocatorProbe;
///
/// let probe = MockLocatorProbe::new();
/// probe.respond_redirect("http://jackett:9117/dl/a", "magnet:?xt=urn:btih:abc").await;
/// probe.respond_status("http://jackett:9117/dl/b", 404, "gone").await;
///
/// let resolver = LocatorResolver::with_probe(Arc::new(probe.clone()), settings);
/// ```
#[derive(Clone, Default)]
pub struct MockLocatorProbe {
    responses: Arc<RwLock<HashMap<String, ScriptedResponse>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    requests: Arc<RwLock<Vec<String>>>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

impl std::fmt::Debug for MockLocatorProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockLocatorProbe")
            .field("responses", &"<responses>")
            .field("requests", &"<requests>")
            .field("peak_in_flight", &self.peak_in_flight.load(Ordering::SeqCst))
            .finish()
    }
}

impl MockLocatorProbe {
    /// Create a probe that answers `200 OK` to everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `200 OK`.
    pub async fn respond_ok(&self, url: &str) {
        self.respond_status(url, 200, "").await;
    }

    /// Answer `url` with `302 Found` pointing at `location`.
    pub async fn respond_redirect(&self, url: &str, location: &str) {
        self.responses.write().await.insert(
            url.to_string(),
            Ok(ProbeResponse {
                status: 302,
                location: Some(location.to_string()),
                body: String::new(),
            }),
        );
    }

    /// Answer `url` with an arbitrary status and body.
    pub async fn respond_status(&self, url: &str, status: u16, body: &str) {
        self.responses.write().await.insert(
            url.to_string(),
            Ok(ProbeResponse {
                status,
                location: None,
                body: body.to_string(),
            }),
        );
    }

    /// Fail requests to `url` as if the host were unreachable.
    pub async fn fail_unreachable(&self, url: &str) {
        self.responses.write().await.insert(
            url.to_string(),
            Err(LocatorError::unresolvable(url, "connection refused")),
        );
    }

    /// Fail requests to `url` with a timeout.
    pub async fn fail_timeout(&self, url: &str) {
        self.responses.write().await.insert(
            url.to_string(),
            Err(LocatorError::Timeout {
                url: url.to_string(),
            }),
        );
    }

    /// Delay the answer for `url`.
    pub async fn set_delay(&self, url: &str, delay: Duration) {
        self.delays.write().await.insert(url.to_string(), delay);
    }

    /// URLs probed so far, in request order.
    pub async fn recorded_requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    /// Number of probes performed.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Clear recorded requests.
    pub async fn clear_recorded(&self) {
        self.requests.write().await.clear();
    }

    /// Highest number of probes that were in flight at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocatorProbe for MockLocatorProbe {
    fn name(&self) -> &str {
        "mock"
    }

    async fn probe(&self, url: &str) -> Result<ProbeResponse, LocatorError> {
        self.requests.write().await.push(url.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = self.delays.read().await.get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self
            .responses
            .read()
            .await
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                Ok(ProbeResponse {
                    status: 200,
                    location: None,
                    body: String::new(),
                })
            });

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_url_answers_ok() {
        let probe = MockLocatorProbe::new();
        let response = probe.probe("http://x/1").await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(probe.recorded_requests().await, vec!["http://x/1".to_string()]);
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let probe = MockLocatorProbe::new();
        probe.fail_unreachable("http://x/down").await;
        probe.fail_timeout("http://x/slow").await;

        assert!(matches!(
            probe.probe("http://x/down").await,
            Err(LocatorError::Unresolvable { .. })
        ));
        assert!(matches!(
            probe.probe("http://x/slow").await,
            Err(LocatorError::Timeout { .. })
        ));
        assert_eq!(probe.request_count().await, 2);

        probe.clear_recorded().await;
        assert_eq!(probe.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let probe = MockLocatorProbe::new();
        let clone = probe.clone();
        clone.respond_status("http://x/1", 500, "boom").await;

        let response = probe.probe("http://x/1").await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(clone.request_count().await, 1);
        assert_eq!(probe.peak_concurrency(), 1);
    }
}
