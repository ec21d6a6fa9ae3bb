//! # Client configuration — `postboard.toml`
//!
//! The only process-wide setting is where the backend lives. It is resolved
//! once at start by the launcher and then injected into the UI; nothing reads a
//! global constant.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//! ```
//!
//! A missing or empty file is equivalent to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Default backend root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the backend root.
pub const BASE_URL_ENV: &str = "POSTBOARD_API_BASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid api base url {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}

/// Top-level configuration stored in `postboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root every endpoint path is joined onto, e.g. `{base_url}/posts`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "postboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Replace the base URL when an override is present and non-blank.
    pub fn with_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Validated base URL, normalised to end with `/` so relative joins append.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.api.base_url.trim();
        let mut url = Url::parse(raw).map_err(|e| ConfigError::BaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrl {
                url: raw.to_string(),
                reason: "not a hierarchical url".to_string(),
            });
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
