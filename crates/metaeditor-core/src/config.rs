//! Client configuration
//!
//! An [`EditorConfig`] is loaded from environment variables, from a YAML or
//! JSON file, or assembled with [`EditorConfigBuilder`]. Every constructor
//! validates the result.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API URL
pub const API_URL_ENV: &str = "METADATA_EDITOR_API_URL";
/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "METADATA_EDITOR_API_KEY";
/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "METADATA_EDITOR_TIMEOUT_SECS";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for the Metadata Editor service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Base API URL, e.g. `https://metadataeditorqa.worldbank.org/index.php/api`
    pub api_url: String,

    /// Key sent in the `x-api-key` header
    pub api_key: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EditorConfig {
    /// Create and validate a configuration with the default timeout
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_url(api_url).api_key(api_key).build()
    }

    /// Start building a configuration
    pub fn builder() -> EditorConfigBuilder {
        EditorConfigBuilder::default()
    }

    /// Load from `METADATA_EDITOR_API_URL`, `METADATA_EDITOR_API_KEY` and
    /// the optional `METADATA_EDITOR_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_ENV)
            .ok_or_else(|| Error::configuration(format!("{} is not set", API_URL_ENV)))?;
        let api_key = lookup(API_KEY_ENV)
            .ok_or_else(|| Error::configuration(format!("{} is not set", API_KEY_ENV)))?;

        let mut builder = Self::builder().api_url(api_url).api_key(api_key);
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| Error::Configuration {
                message: format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_ENV, raw),
                source: Some(Box::new(e)),
            })?;
            builder = builder.timeout_secs(secs);
        }
        builder.build()
    }

    /// Load configuration from a YAML (`.yaml`/`.yml`) or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Configuration {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            source: Some(Box::new(e)),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| Error::Configuration {
                message: format!("Invalid YAML in {}: {}", path.display(), e),
                source: Some(Box::new(e)),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| Error::Configuration {
                message: format!("Invalid JSON in {}: {}", path.display(), e),
                source: Some(Box::new(e)),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the URL scheme, the key and the timeout
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url).map_err(|e| Error::Configuration {
            message: format!("Input should be a valid URL, {}", e),
            source: Some(Box::new(e)),
        })?;
        if url.scheme() != "https" {
            return Err(Error::configuration("URL scheme should be 'https'"));
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration("API key must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration("Timeout must be at least one second"));
        }
        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Builder for [`EditorConfig`]
#[derive(Default)]
pub struct EditorConfigBuilder {
    api_url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

impl EditorConfigBuilder {
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<EditorConfig> {
        let config = EditorConfig {
            api_url: self
                .api_url
                .ok_or_else(|| Error::configuration("API URL is required"))?,
            api_key: self
                .api_key
                .ok_or_else(|| Error::configuration("API key is required"))?,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }
}
