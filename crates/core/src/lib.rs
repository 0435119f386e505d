pub mod config;
pub mod locator;
pub mod metrics;
pub mod naming;
pub mod selection;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, IndexerSettings,
    ResolverConfig, SanitizedConfig,
};
pub use locator::{
    build_http_client, is_magnet_url, parse_search_results, rewrite_indexer_host, HttpProbe,
    LocatorError, LocatorProbe, LocatorResolver, ProbeResponse, ResolvedResult, SearchResult,
};
pub use naming::{
    derive_path, derive_path_for_record, release_extension, MediaPath, MediaRecord, NamingError,
    WatchMedia, WatchMovie, WatchTvEpisode, WatchTvSeason,
};
pub use selection::{
    select_best, select_best_candidate, FilterReport, RejectedResult, ResultFilter, Seeded,
};
