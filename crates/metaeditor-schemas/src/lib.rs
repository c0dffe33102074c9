//! Metadata Editor Schemas - record schemas, validation and partial updates
//!
//! This crate holds the typed entity catalogs of the two record kinds served
//! by the Metadata Editor:
//! - **Timeseries**: indicator metadata with a series description, DataCite
//!   block and provenance
//! - **Survey microdata**: DDI-style study, data file and variable metadata
//!
//! ## Features
//!
//! - **Closed-world validation**: unknown fields are rejected, never dropped
//! - **Complete error reports**: every violation in the tree, with dotted paths
//! - **Partial updates**: replace top-level fields without touching the rest
//! - **Skeletons**: minimal records that show the mandatory shape of a kind
//!
//! ## Quick Start
//!
//! ```rust
//! use metaeditor_schemas::{skeleton, validate, FieldUpdates, RecordKind};
//! use serde_json::json;
//!
//! let record = validate(
//!     json!({"idno": "GDP", "series_description": {"idno": "GDP", "name": "GDP"}}),
//!     RecordKind::Timeseries,
//! )
//! .unwrap();
//! assert_eq!(record.idno(), "GDP");
//!
//! let updated = record
//!     .merge(FieldUpdates::new().set_value("tags", json!([{"tag": "economy"}])))
//!     .unwrap();
//! assert!(updated.field_value("tags").is_some());
//!
//! let blank = skeleton(RecordKind::SurveyMicrodata, "SRV-1", "Household survey");
//! assert!(validate(blank, RecordKind::SurveyMicrodata).is_ok());
//! ```
//!
//! ## Error format
//!
//! A failed validation renders as a leading newline followed by one line per
//! violation, `"<kind>: <dotted.path> <lower-cased message>"`.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

pub mod entities;
pub mod record;
pub mod skeleton;
pub mod update;
pub mod validation;

// Re-export commonly used types for convenience
pub use entities::{MicrodataMetadata, TimeseriesMetadata};
pub use record::{Record, RecordKind};
pub use skeleton::{skeleton, survey_microdata_skeleton, timeseries_skeleton};
pub use update::{merge, FieldUpdates};
pub use validation::{
    validate, validate_as, validate_named, Entity, FieldPath, FieldType, MetadataInput,
    SchemaViolation, Uri, ValidationError, ValidationResult, Violation, ViolationKind,
};
