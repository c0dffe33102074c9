//! HTTP error normalization
//!
//! Normalizes failed Metadata Editor responses into a uniform error format
//! before they are turned into [`crate::Error`] values.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::logging::redaction::redact_json_value;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Normalized HTTP error representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
    /// URL of the failed request
    pub url: String,
    /// HTTP status code, `None` when no response arrived
    pub status_code: Option<u16>,
    /// Human-readable error message
    pub message: String,
    /// Response body, when it was JSON
    pub details: Option<Value>,
}

impl HttpError {
    /// Create from a reqwest Response
    pub async fn from_response(url: &str, response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_parts(url, status, &body)
    }

    /// Create from a status code and the raw response body
    pub fn from_parts(url: &str, status: StatusCode, body: &str) -> Self {
        let details = serde_json::from_str::<Value>(body).ok();
        let message = Self::extract_message(&details, body, status);

        Self {
            url: url.to_string(),
            status_code: Some(status.as_u16()),
            message,
            details,
        }
    }

    /// Create from a network/request error
    pub fn from_request_error(url: &str, error: &reqwest::Error) -> Self {
        Self {
            url: url.to_string(),
            status_code: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
            details: None,
        }
    }

    /// The service reports errors as `{"message": "..."}`; fall back to the raw body
    fn extract_message(details: &Option<Value>, body: &str, status: StatusCode) -> String {
        if let Some(message) = details
            .as_ref()
            .and_then(|json| json.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
        if body.trim().is_empty() {
            return status
                .canonical_reason()
                .unwrap_or("empty response")
                .to_string();
        }
        body.to_string()
    }

    /// The JSON body with keys, tokens and passwords masked, fit for logging
    pub fn redacted_details(&self) -> Option<Value> {
        let mut details = self.details.clone()?;
        redact_json_value(&mut details);
        Some(details)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP Error [{}]: {}",
            self.status_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            self.message,
        )
    }
}

impl std::error::Error for HttpError {}

/// 404 and 403 get their own variants; everything else is a failed request
impl From<HttpError> for crate::Error {
    fn from(http_error: HttpError) -> Self {
        match http_error.status_code {
            Some(404) => crate::Error::NotFound {
                url: http_error.url,
            },
            Some(403) => crate::Error::PermissionDenied {
                url: http_error.url,
            },
            _ => crate::Error::Request {
                message: http_error.message.clone(),
                status: http_error.status_code,
                source: Some(Box::new(http_error)),
            },
        }
    }
}
