//! Client configuration.
//!
//! A `ClientConfig` is an owned value handed to each client instance; nothing
//! is global. It can be built from defaults, parsed from TOML, and overridden
//! from the environment.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_API_DOMAIN: &str = "https://api.pkmnapi.com";
pub const DEFAULT_API_VERSION: u32 = 1;

pub const ENV_API_DOMAIN: &str = "PKMNAPI_API_DOMAIN";
pub const ENV_API_VERSION: &str = "PKMNAPI_API_VERSION";
pub const ENV_ACCESS_TOKEN: &str = "PKMNAPI_ACCESS_TOKEN";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "PKMNAPI_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub api_domain: String,
    pub api_version: u32,
    pub access_token: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_domain: DEFAULT_API_DOMAIN.to_string(),
            api_version: DEFAULT_API_VERSION,
            access_token: None,
            request_timeout_ms: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// A bearer token must carry at least one non-whitespace character.
pub(crate) fn check_access_token(token: &str) -> Result<(), ConfigError> {
    if token.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "access_token",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

impl ClientConfig {
    /// Defaults pointed at another domain.
    pub fn with_domain(api_domain: impl Into<String>) -> Self {
        Self {
            api_domain: api_domain.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Apply `PKMNAPI_*` variables from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup keyed by the `PKMNAPI_*` names.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(domain) = lookup(ENV_API_DOMAIN) {
            self.api_domain = domain;
        }
        if let Some(version) = lookup(ENV_API_VERSION) {
            self.api_version = version.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "api_version",
                reason: format!("{version:?} is not a version number: {e}"),
            })?;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT_MS) {
            let millis = timeout.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: format!("{timeout:?} is not a number of milliseconds: {e}"),
            })?;
            self.request_timeout_ms = Some(millis);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = self.api_domain.trim();
        if domain.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_domain",
                reason: "must not be empty".to_string(),
            });
        }
        if !domain.starts_with("http://") && !domain.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "api_domain",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.api_version == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api_version",
                reason: "must be > 0".to_string(),
            });
        }
        if let Some(token) = &self.access_token {
            check_access_token(token)?;
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// `{api_domain}/v{api_version}`, trailing slash on the domain stripped.
    pub fn base_url(&self) -> String {
        format!(
            "{}/v{}",
            self.api_domain.trim().trim_end_matches('/'),
            self.api_version
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "https://api.pkmnapi.com/v1");
        assert!(config.access_token.is_none());
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = ClientConfig::with_domain("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            api_version = 2
            access_token = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_domain, DEFAULT_API_DOMAIN);
        assert_eq!(config.api_version, 2);
        assert_eq!(config.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        let err = ClientConfig::from_toml_str("api_host = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_domain = \"http://127.0.0.1:9000\"").unwrap();
        writeln!(file, "request_timeout_ms = 2500").unwrap();
        let config = ClientConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9000/v1");
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn overrides_replace_fields() {
        let config = ClientConfig::default()
            .with_overrides_from(lookup(&[
                (ENV_API_DOMAIN, "http://localhost:3000"),
                (ENV_API_VERSION, "3"),
                (ENV_ACCESS_TOKEN, "token"),
                (ENV_REQUEST_TIMEOUT_MS, "100"),
            ]))
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000/v3");
        assert_eq!(config.access_token.as_deref(), Some("token"));
        assert_eq!(config.request_timeout_ms, Some(100));
    }

    #[test]
    fn overrides_reject_bad_numbers() {
        let err = ClientConfig::default()
            .with_overrides_from(lookup(&[(ENV_API_VERSION, "one")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "api_version",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cases = [
            ClientConfig::with_domain(""),
            ClientConfig::with_domain("api.pkmnapi.com"),
            ClientConfig {
                api_version: 0,
                ..ClientConfig::default()
            },
            ClientConfig {
                access_token: Some("  ".to_string()),
                ..ClientConfig::default()
            },
            ClientConfig {
                request_timeout_ms: Some(0),
                ..ClientConfig::default()
            },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{config:?} should be invalid");
        }
    }
}
