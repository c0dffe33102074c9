//! Logging utilities for the Metadata Editor client
//!
//! This module provides:
//! - Structured logging setup in compact, full or JSON format
//! - Request ID generation for per-request spans
//! - Redaction of API keys and other secrets before they reach a log line
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{field, Span};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV: &str = "METAEDITOR_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter, in `EnvFilter` syntax
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Allow ANSI colors when stderr is a terminal
    pub ansi: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Module-based filtering
    pub module_filter: Option<HashMap<String, String>>,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "full" => Ok(LogFormat::Full),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::configuration(format!(
                "Invalid log format '{}', expected one of compact, full, json",
                other
            ))),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            ansi: true,
            thread_ids: false,
            source_location: false,
            module_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Apply `RUST_LOG` and `METAEDITOR_LOG_FORMAT` overrides
    pub fn merge_with_env(&mut self) {
        self.merge_with(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // RUST_LOG takes precedence
        if let Some(rust_log) = lookup("RUST_LOG") {
            self.level = rust_log;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(_) => tracing::warn!("Invalid log format: {}, using default", format),
            }
        }
    }
}

/// Initialize the global logging system.
///
/// Fails when a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config)?;
    let ansi = config.ansi && std::io::stderr().is_terminal();

    // Each format produces a distinct subscriber type
    let installed = match config.format {
        LogFormat::Compact => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .finish(),
        ),
        LogFormat::Full => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish(),
        ),
    };

    installed.map_err(|e| Error::Configuration {
        message: format!("Failed to initialize logging: {}", e),
        source: Some(Box::new(e)),
    })?;

    tracing::debug!(config = ?config, "Logging system initialized");
    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(&config.level).map_err(|e| Error::Configuration {
        message: format!("Invalid log level '{}': {}", config.level, e),
        source: Some(Box::new(e)),
    })?;

    if let Some(module_filters) = &config.module_filter {
        for (module, level) in module_filters {
            let directive: Directive = format!("{}={}", module, level).parse().map_err(|e| {
                Error::configuration(format!("Invalid filter directive: {}", e))
            })?;
            filter = filter.add_directive(directive);
        }
    }

    Ok(filter)
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Create the span that wraps a single service request
pub fn request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "metaeditor_request",
        request_id = %generate_request_id(),
        method = method,
        path = path,
        status = field::Empty,
        duration_ms = field::Empty,
    )
}

/// Record request duration in the given span
pub fn record_duration(span: &Span, start_time: Instant) {
    span.record("duration_ms", start_time.elapsed().as_millis() as u64);
}

/// Sensitive data redaction utilities
pub mod redaction {
    use regex::Regex;
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

    fn patterns() -> &'static [Regex] {
        PATTERNS.get_or_init(|| {
            [
                r#"(?i)(x-api-key|api[_-]?key|apikey)[=:\s]+['"]?([a-zA-Z0-9_-]{10,})['"]?"#,
                r#"(?i)(token|bearer)[=:\s]+['"]?([a-zA-Z0-9_.-]{10,})['"]?"#,
                r#"(?i)(password|passwd|pwd)[=:\s]+['"]?([^\s'"]{3,})['"]?"#,
            ]
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
        })
    }

    /// Redact sensitive information from a string
    pub fn redact_sensitive(input: &str) -> String {
        patterns()
            .iter()
            .fold(input.to_string(), |text, regex| {
                regex.replace_all(&text, "$1=***").into_owned()
            })
    }

    /// Redact sensitive information from JSON values
    pub fn redact_json_value(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, val) in map.iter_mut() {
                    if is_sensitive_key(key) {
                        *val = serde_json::Value::String("***".to_string());
                    } else {
                        redact_json_value(val);
                    }
                }
            }
            serde_json::Value::Array(arr) => {
                for item in arr.iter_mut() {
                    redact_json_value(item);
                }
            }
            serde_json::Value::String(s) => {
                *s = redact_sensitive(s);
            }
            _ => {}
        }
    }

    /// Check if a JSON key contains sensitive information
    fn is_sensitive_key(key: &str) -> bool {
        let key_lower = key.to_lowercase();
        ["key", "token", "password", "passwd", "secret", "credential", "auth"]
            .iter()
            .any(|needle| key_lower.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::redaction::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_id_generation() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();

        assert_ne!(id1, id2);
        assert!(id1.starts_with("req_"));
        assert_eq!(id1.len(), 36); // "req_" + 32 hex chars
    }

    #[test]
    fn test_sensitive_data_redaction() {
        let input = "x-api-key: abcdef1234567890 password=secret123";
        let redacted = redact_sensitive(input);

        assert!(!redacted.contains("abcdef1234567890"));
        assert!(!redacted.contains("secret123"));
        assert!(redacted.contains("***"));
    }

    #[test]
    fn test_json_redaction() {
        let mut value = json!({
            "api_key": "secret123",
            "idno": "TS-001",
            "nested": {"token": "abc", "title": "Survey"}
        });

        redact_json_value(&mut value);

        assert_eq!(value["api_key"], "***");
        assert_eq!(value["idno"], "TS-001");
        assert_eq!(value["nested"]["token"], "***");
        assert_eq!(value["nested"]["title"], "Survey");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = LoggingConfig::default();
        config.merge_with(|name| match name {
            "RUST_LOG" => Some("metaeditor_core=trace".to_string()),
            LOG_FORMAT_ENV => Some("JSON".to_string()),
            _ => None,
        });

        assert_eq!(config.level, "metaeditor_core=trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_format_override_keeps_default() {
        let mut config = LoggingConfig::default();
        config.merge_with(|name| (name == LOG_FORMAT_ENV).then(|| "xml".to_string()));
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "metaeditor_core=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        assert!(create_env_filter(&config).is_err());
    }
}
