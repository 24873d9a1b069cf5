use reqwest::Url;

use super::{types::Config, ConfigError};

/// Upper bound for the search debounce window
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Validate configuration
/// Currently validates:
/// - api.base_url is an absolute http(s) URL
/// - search.debounce_ms is at most `MAX_DEBOUNCE_MS`
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let url = Url::parse(&config.api.base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "api.base_url '{}' is not a valid URL: {}",
            config.api.base_url, e
        ))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.search.debounce_ms > MAX_DEBOUNCE_MS {
        return Err(ConfigError::ValidationError(format!(
            "search.debounce_ms cannot exceed {}",
            MAX_DEBOUNCE_MS
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, SearchConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_unparsable_url() {
        let config = Config {
            api: ApiConfig {
                base_url: "heroes".to_string(),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config {
            api: ApiConfig {
                base_url: "ftp://example.com/api/".to_string(),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_validate_rejects_huge_debounce() {
        let config = Config {
            search: SearchConfig {
                debounce_ms: MAX_DEBOUNCE_MS + 1,
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
