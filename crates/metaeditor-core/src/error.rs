//! Error types for the Metadata Editor client
//!
//! Transport failures, service refusals and metadata validation failures all
//! surface through the single [`Error`] enum defined here.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use metaeditor_schemas::{SchemaViolation, ValidationError};
use thiserror::Error;

/// Main error type for Metadata Editor operations
#[derive(Error, Debug)]
pub enum Error {
    /// The service answered 404 for the requested path
    #[error("Page not found. Check that the API URL '{url}' is correct")]
    NotFound { url: String },

    /// The service answered 403
    #[error("Access to that URL is denied. Check that the API key is correct")]
    PermissionDenied { url: String },

    /// The service refused an id-scoped request (400)
    #[error("Access to this id is denied. Check that the id '{id}' is correct")]
    IdDenied { id: String },

    /// Any other failed request, with or without a status code
    #[error("Request failed ({}): {message}", display_status(.status))]
    Request {
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered with a body that is not JSON
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// The delete request went through but the project is still there
    #[error("Project '{id}' still exists after the delete request was sent")]
    DeleteNotApplied { id: String },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Metadata does not satisfy its record schema
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn display_status(status: &Option<u16>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "no status".to_string(),
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error without a source
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the error means the addressed project does not exist or is not reachable
    pub fn is_missing_project(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::PermissionDenied { .. } | Error::IdDenied { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<SchemaViolation> for Error {
    fn from(err: SchemaViolation) -> Self {
        Error::Validation(ValidationError::Schema(err))
    }
}
