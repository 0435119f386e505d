//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Locator resolution (outcomes, probe latency)
//! - Candidate filtering (input vs resolved counts)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Locator Metrics
// =============================================================================

/// Locator resolutions total by outcome.
pub static LOCATOR_RESOLUTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "mediagrab_locator_resolutions_total",
            "Total download locator resolutions",
        ),
        &["outcome"], // "magnet", "redirect_magnet", "direct_url", "failed"
    )
    .unwrap()
});

/// Duration of a single download link probe.
pub static LOCATOR_PROBE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "mediagrab_locator_probe_duration_seconds",
            "Duration of download link probes",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["status"], // "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Filter Metrics
// =============================================================================

/// Candidates seen and kept per filter pass.
pub static FILTERED_CANDIDATES: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "mediagrab_filtered_candidates",
            "Number of candidates per filter pass",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        &["stage"], // "input", "resolved"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(LOCATOR_RESOLUTIONS.clone()),
        Box::new(LOCATOR_PROBE_DURATION.clone()),
        Box::new(FILTERED_CANDIDATES.clone()),
    ]
}
