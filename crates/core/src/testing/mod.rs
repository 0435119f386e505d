//! Testing utilities and mock implementations.
//!
//! This module provides a mock `LocatorProbe` so resolution and filtering
//! can be exercised without a live indexer, plus fixtures for search results
//! and watch media.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediagrab_core::testing::{fixtures, MockLocatorProbe};
//!
//! let probe = MockLocatorProbe::new();
//! probe.respond_status("http://jackett:9117/dl/x", 404, "gone").await;
//!
//! let results = vec![
//!     fixtures::magnet_result("Rambo", "abc", 10),
//!     fixtures::link_result("Rambo", "http://jackett:9117/dl/x", 50),
//! ];
//! ```

mod mock_locator_probe;

pub use mock_locator_probe::MockLocatorProbe;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::config::IndexerSettings;
    use crate::locator::{ResolvedResult, SearchResult};
    use crate::naming::{WatchMedia, WatchMovie, WatchTvEpisode, WatchTvSeason};

    /// Indexer settings pointing at `jackett:9117`.
    pub fn indexer_settings() -> IndexerSettings {
        IndexerSettings {
            host: "jackett".to_string(),
            port: 9117,
            api_token: "test-token".to_string(),
        }
    }

    /// A result carrying a magnet URI built from `info_hash`.
    pub fn magnet_result(title: &str, info_hash: &str, seeders: u32) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: format!("http://jackett:9117/dl/mock/?path={}", info_hash),
            magnet_uri: Some(format!("magnet:?xt=urn:btih:{}", info_hash)),
            seeders,
        }
    }

    /// A result with only an indexer-hosted link.
    pub fn link_result(title: &str, link: &str, seeders: u32) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: link.to_string(),
            magnet_uri: None,
            seeders,
        }
    }

    /// A resolved result whose locator is its own link.
    pub fn resolved(title: &str, seeders: u32) -> ResolvedResult {
        let result = link_result(title, &format!("http://jackett:9117/dl/{}", title), seeders);
        ResolvedResult {
            torrent_url: result.link.clone(),
            result,
        }
    }

    pub fn movie(title: &str, release_year: i32) -> WatchMedia {
        WatchMedia::Movie(WatchMovie {
            title: title.to_string(),
            release_year,
        })
    }

    pub fn tv_season(show_title: &str, season_number: u32) -> WatchMedia {
        WatchMedia::TvSeason(WatchTvSeason {
            show_title: show_title.to_string(),
            season_number,
        })
    }

    pub fn tv_episode(show_title: &str, season_number: u32, episode_number: u32) -> WatchMedia {
        WatchMedia::TvEpisode(WatchTvEpisode {
            show_title: show_title.to_string(),
            season_number,
            episode_number,
        })
    }
}
