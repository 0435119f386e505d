use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Indexer host is set and port is not 0
/// - Resolver timeouts and concurrency are positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.indexer.host.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "indexer.host cannot be empty".to_string(),
        ));
    }

    if config.indexer.port == 0 {
        return Err(ConfigError::ValidationError(
            "indexer.port cannot be 0".to_string(),
        ));
    }

    if config.resolver.timeout_secs == 0 || config.resolver.connect_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "resolver timeouts must be greater than 0".to_string(),
        ));
    }

    if config.resolver.max_concurrent == 0 {
        return Err(ConfigError::ValidationError(
            "resolver.max_concurrent must be at least 1".to_string(),
        ));
    }

    Ok(())
}
