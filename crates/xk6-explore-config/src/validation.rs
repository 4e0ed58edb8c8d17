// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use url::Url;

use crate::diagnostic::ConfigError;
use crate::model::ExploreConfig;

/// Accepted values for `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &ExploreConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let url = config.catalog.url.trim();
    if url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "catalog.url must not be empty".to_string(),
        });
    } else if let Err(reason) = check_http_url(url) {
        errors.push(ConfigError::Validation {
            message: format!("catalog.url `{url}` {reason}"),
        });
    }

    let level = config.log.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accept only absolute `http`/`https` URLs with a host, parsed the same way
/// the catalog fetcher parses them.
fn check_http_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| format!("is not a valid URL: {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("must use http or https, not `{}`", url.scheme()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("must include a host".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_http_url(raw: &str) -> bool {
        check_http_url(raw).is_ok()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ExploreConfig::default()).is_ok());
    }

    #[test]
    fn http_urls_are_accepted() {
        assert!(is_http_url("https://registry.k6.io/catalog.json"));
        assert!(is_http_url("http://127.0.0.1:8080"));
        assert!(is_http_url("http://localhost/catalog.json?x=1"));
    }

    #[test]
    fn non_http_urls_are_rejected() {
        assert!(!is_http_url("ftp://registry.k6.io/catalog.json"));
        assert!(!is_http_url("://invalid-url"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("registry.k6.io/catalog.json"));
        assert!(!is_http_url("file:///tmp/catalog.json"));
    }

    #[test]
    fn urls_the_fetcher_cannot_parse_are_rejected() {
        assert!(!is_http_url("http://host:99999/catalog.json"));
        assert!(!is_http_url("http://exa mple.com/catalog.json"));
        assert!(!is_http_url("http://[::1/catalog.json"));
    }

    #[test]
    fn invalid_port_is_reported_with_parse_reason() {
        let mut config = ExploreConfig::default();
        config.catalog.url = "http://host:99999/catalog.json".to_string();

        let errors = validate_config(&config).expect_err("invalid port should fail validation");
        assert!(matches!(
            &errors[..],
            [ConfigError::Validation { message }] if message.contains("not a valid URL")
        ));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = ExploreConfig::default();
        config.catalog.url = "file:///tmp/catalog.json".to_string();
        config.log.level = "loud".to_string();

        let errors = validate_config(&config).expect_err("should fail validation");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = ExploreConfig::default();
        config.log.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
