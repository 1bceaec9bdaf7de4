//! # Client configuration: `carbontrack.toml`
//!
//! Where the backend lives.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://carbontrack.example.com/api"
//! ```
//!
//! ## Sources
//!
//! | Source | When |
//! |--------|------|
//! | `CARBONTRACK_API_URL` at compile time | web builds (the browser has no process environment) |
//! | `CARBONTRACK_API_URL` at run time | native builds, overrides the compile-time value |
//! | [`ClientConfig::from_toml`] | explicit config files |
//! | [`DEFAULT_API_URL`] | nothing else set |
//!
//! All structs derive `Default` so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const API_URL_VAR: &str = "CARBONTRACK_API_URL";

/// Top-level configuration stored in `carbontrack.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Resolve the config from the build and process environment.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_URL_VAR) {
                if !url.trim().is_empty() {
                    tracing::info!("{API_URL_VAR} set at runtime: {url}");
                    return Self::new(url.trim());
                }
            }
        }

        match option_env!("CARBONTRACK_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                tracing::info!("{API_URL_VAR} not set, using default: {DEFAULT_API_URL}");
                Self::default()
            }
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "carbontrack.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://carbon.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://carbon.example.com/api");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://10.0.0.2:5000/api");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
