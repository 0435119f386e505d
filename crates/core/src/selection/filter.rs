//! Locator filtering of search results.

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::config::Config;
use crate::locator::{build_http_client, LocatorError, LocatorResolver, ResolvedResult, SearchResult};
use crate::metrics;

use super::ranker::select_best;

/// A search result whose locator could not be resolved.
#[derive(Debug, Clone)]
pub struct RejectedResult {
    pub result: SearchResult,
    pub error: LocatorError,
}

/// Outcome of a filter pass, split into kept and dropped candidates.
///
/// Both lists keep the relative order of the input.
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    pub resolved: Vec<ResolvedResult>,
    pub rejected: Vec<RejectedResult>,
}

/// Resolves the locator of every search result and drops the failures.
///
/// Each candidate gets exactly one resolution attempt. Up to
/// `max_concurrent` resolutions run at once; results come back in input
/// order regardless.
#[derive(Debug, Clone)]
pub struct ResultFilter {
    resolver: LocatorResolver,
    max_concurrent: usize,
}

impl ResultFilter {
    /// Create a filter. A `max_concurrent` of 0 is treated as 1.
    pub fn new(resolver: LocatorResolver, max_concurrent: usize) -> Self {
        Self {
            resolver,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Build the HTTP client, resolver and filter described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.resolver)?;
        let resolver = LocatorResolver::new(client, config.indexer.clone());
        Ok(Self::new(resolver, config.resolver.max_concurrent))
    }

    pub fn resolver(&self) -> &LocatorResolver {
        &self.resolver
    }

    /// Keep only the results whose locator resolves.
    pub async fn filter(&self, results: Vec<SearchResult>) -> Vec<ResolvedResult> {
        self.filter_with_report(results).await.resolved
    }

    /// Resolve every result and partition into resolved and rejected.
    pub async fn filter_with_report(&self, results: Vec<SearchResult>) -> FilterReport {
        let input = results.len();
        debug!(
            candidates = input,
            max_concurrent = self.max_concurrent,
            "Resolving candidate locators"
        );

        let outcomes: Vec<Result<ResolvedResult, RejectedResult>> = stream::iter(results)
            .map(|result| {
                let resolver = self.resolver.clone();
                async move {
                    match resolver.resolve_result(&result).await {
                        Ok(torrent_url) => Ok(ResolvedResult {
                            result,
                            torrent_url,
                        }),
                        Err(error) => Err(RejectedResult { result, error }),
                    }
                }
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let (resolved, rejected): (Vec<_>, Vec<_>) =
            outcomes.into_iter().partition(|outcome| outcome.is_ok());

        let resolved: Vec<ResolvedResult> = resolved.into_iter().filter_map(Result::ok).collect();
        let rejected: Vec<RejectedResult> = rejected.into_iter().filter_map(Result::err).collect();

        for dropped in &rejected {
            info!(
                title = %dropped.result.title,
                error = %dropped.error,
                "Exception tracing torrent url"
            );
        }
        for kept in &resolved {
            info!(
                title = %kept.result.title,
                seeders = kept.result.seeders,
                "Valid match"
            );
        }

        metrics::FILTERED_CANDIDATES
            .with_label_values(&["input"])
            .observe(input as f64);
        metrics::FILTERED_CANDIDATES
            .with_label_values(&["resolved"])
            .observe(resolved.len() as f64);

        FilterReport { resolved, rejected }
    }
}

/// Filter `results` and return the best resolvable candidate, if any.
pub async fn select_best_candidate(
    filter: &ResultFilter,
    results: Vec<SearchResult>,
) -> Option<ResolvedResult> {
    let resolved = filter.filter(results).await;
    select_best(&resolved).cloned()
}
