//! Metadata Editor Core - client for the Metadata Editor API
//!
//! This crate connects to a Metadata Editor service, validates metadata
//! against the record schemas from `metaeditor-schemas` before sending it,
//! and decodes stored metadata back into typed records.
//!
//! # Main Components
//!
//! - **Client**: [`MetadataEditor`] list/get/create/update/delete operations
//! - **Transport**: the [`Transport`] seam and its reqwest implementation
//! - **Configuration**: [`EditorConfig`] from the environment or a file
//! - **Error Handling**: a single [`Error`] enum built with `thiserror`
//! - **Logging**: `tracing` setup with API key redaction
//!
//! # Example
//!
//! ```no_run
//! use metaeditor_core::{EditorConfig, FieldUpdates, MetadataEditor, Result};
//! use serde_json::json;
//!
//! async fn example() -> Result<()> {
//!     let config = EditorConfig::new("https://metadataeditorqa.worldbank.org/index.php/api", "my-key")?;
//!     let editor = MetadataEditor::connect(config).await?;
//!
//!     editor
//!         .create_timeseries(json!({
//!             "idno": "TS-001",
//!             "series_description": {"idno": "TS-001", "name": "GDP growth"}
//!         }))
//!         .await?;
//!
//!     let projects = editor.list_projects().await?;
//!     let id = &projects[0].id;
//!     editor
//!         .update_timeseries_by_id(id, FieldUpdates::new().set("idno", "TS-002".to_string()))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::MetadataEditor;
pub use config::{EditorConfig, EditorConfigBuilder};
pub use error::{Error, Result};
pub use http::{HttpError, HttpTransport};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use transport::Transport;
pub use types::Project;

// Schema types used in client signatures
pub use metaeditor_schemas::{
    FieldUpdates, MetadataInput, MicrodataMetadata, Record, RecordKind, TimeseriesMetadata,
};
