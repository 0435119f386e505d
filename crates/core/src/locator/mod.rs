//! Download locator resolution.
//!
//! This module turns raw indexer search results into fetchable locators:
//! a magnet URI, or an indexer-hosted .torrent URL rewritten to point at the
//! configured aggregator host. Links that redirect to a magnet URI are traced
//! through a `LocatorProbe` without following the redirect.

mod http_probe;
mod resolver;
mod types;

pub use http_probe::{build_http_client, HttpProbe};
pub use resolver::{is_magnet_url, rewrite_indexer_host, LocatorResolver};
pub use types::*;
