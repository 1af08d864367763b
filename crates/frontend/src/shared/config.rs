//! Client configuration
//!
//! `config.toml` is compiled into the bundle; the `FOODCOST_API_URL`
//! environment variable seen at build time replaces the base URL so every
//! deployment talks to exactly one API.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u32,
}

fn default_timeout_ms() -> u32 {
    15_000
}

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

/// Used when the embedded file does not parse
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:8000"
request_timeout_ms = 15000
"#;

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| {
    let url_override = option_env!("FOODCOST_API_URL");
    match parse_config(EMBEDDED_CONFIG, url_override) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config.toml is invalid ({}), using defaults", e);
            parse_config(DEFAULT_CONFIG, url_override).unwrap_or_else(|_| ClientConfig {
                api: ApiConfig {
                    base_url: "http://127.0.0.1:8000".to_string(),
                    request_timeout_ms: default_timeout_ms(),
                },
            })
        }
    }
});

/// Parse a TOML config and apply the base URL override, if any.
pub fn parse_config(raw: &str, url_override: Option<&str>) -> Result<ClientConfig, toml::de::Error> {
    let mut config: ClientConfig = toml::from_str(raw)?;
    if let Some(url) = url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

pub fn config() -> &'static ClientConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(EMBEDDED_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.api.request_timeout_ms, 15_000);
    }

    #[test]
    fn test_default_config_loads() {
        assert!(parse_config(DEFAULT_CONFIG, None).is_ok());
    }

    #[test]
    fn test_override_replaces_base_url() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://api.example.com/")).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_timeout_defaults_when_absent() {
        let config = parse_config("[api]\nbase_url = \"http://x/\"\n", None).unwrap();
        assert_eq!(config.api.base_url, "http://x");
        assert_eq!(config.api.request_timeout_ms, 15_000);
    }
}
