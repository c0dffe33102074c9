//! reqwest-backed transport for the Metadata Editor API
//!
//! Provides authenticated JSON requests against the configured API URL.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::config::EditorConfig;
use crate::http::HttpError;
use crate::logging::{record_duration, redaction::redact_sensitive, request_span};
use crate::transport::Transport;
use crate::{Error, Result};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn, Instrument};
use url::Url;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP transport sending JSON to the Metadata Editor service
#[derive(Clone)]
pub struct HttpTransport {
    /// Underlying reqwest client
    client: ReqwestClient,
    /// API URL every request path is appended to
    base_url: Url,
    /// Value of the `x-api-key` header
    api_key: String,
}

impl HttpTransport {
    /// Create a transport from a validated configuration
    pub fn new(config: &EditorConfig) -> Result<Self> {
        config.validate()?;
        Self::with_base_url(&config.api_url, &config.api_key, config.timeout())
    }

    /// Create a transport for any base URL.
    ///
    /// Skips the `https` requirement, which lets tests point the client at a
    /// local mock server.
    pub fn with_base_url(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::Configuration {
            message: format!("Input should be a valid URL, {}", e),
            source: Some(Box::new(e)),
        })?;

        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `path` to the base URL.
    ///
    /// `Url::join` would drop the base path for absolute paths, so the
    /// segments are concatenated instead.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| Error::Configuration {
            message: format!("Invalid request path '{}': {}", path, e),
            source: Some(Box::new(e)),
        })
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.endpoint(path)?;
        let span = request_span(method.as_str(), path);

        async move {
            let start = Instant::now();
            let mut request = self
                .client
                .request(method, url.clone())
                .header(API_KEY_HEADER, &self.api_key);
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await.map_err(|e| {
                warn!(error = %e, "request failed before a response arrived");
                Error::from(HttpError::from_request_error(url.as_str(), &e))
            })?;

            let status = response.status();
            let span = tracing::Span::current();
            span.record("status", status.as_u16());
            record_duration(&span, start);

            if !status.is_success() {
                let error = HttpError::from_response(url.as_str(), response).await;
                warn!(
                    status = status.as_u16(),
                    message = %redact_sensitive(&error.message),
                    details = ?error.redacted_details(),
                    "service returned an error"
                );
                return Err(error.into());
            }

            let text = response.text().await.map_err(|e| Error::InvalidResponse {
                url: url.to_string(),
                message: format!("Failed to read response body: {}", e),
            })?;
            debug!(status = status.as_u16(), bytes = text.len(), "response received");

            serde_json::from_str::<Value>(&text).map_err(|e| Error::InvalidResponse {
                url: url.to_string(),
                message: format!("Response is not valid JSON: {}", e),
            })
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .finish()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::with_base_url(base, "key", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let transport = transport("https://example.com/index.php/api/");
        assert_eq!(
            transport.endpoint("/editor/12").unwrap().as_str(),
            "https://example.com/index.php/api/editor/12"
        );
        assert_eq!(
            transport.endpoint("editor/").unwrap().as_str(),
            "https://example.com/index.php/api/editor/"
        );
    }

    #[test]
    fn test_new_requires_https() {
        let config = EditorConfig {
            api_url: "http://example.com".to_string(),
            api_key: "key".to_string(),
            timeout_secs: 5,
        };
        assert!(HttpTransport::new(&config).is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", transport("https://example.com"));
        assert!(!debug.contains("\"key\""));
    }
}
