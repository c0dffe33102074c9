//! Validation of metadata against a record kind
//!
//! Metadata can be handed over as an already typed record, a JSON mapping or
//! JSON text. Whatever the shape, it is reduced to a mapping and walked
//! against the entity catalog of the requested kind, collecting every
//! violation in the tree before failing.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod path;

pub use base::{
    conform_member, Additional, Entity, FieldType, Uri, Violations, PLACEHOLDER_URI,
};
pub use error::{
    SchemaViolation, ValidationError, ValidationResult, Violation, ViolationKind,
};
pub use path::{FieldPath, PathSegment};

use crate::entities::{MicrodataMetadata, TimeseriesMetadata};
use crate::record::{Record, RecordKind};
use serde_json::Value;
use tracing::{debug, warn};

/// Metadata in any of the accepted shapes
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataInput {
    /// A typed record
    Record(Record),
    /// A JSON mapping; a JSON string is treated as text
    Mapping(Value),
    /// JSON text
    Text(String),
}

impl MetadataInput {
    /// Reduce the input to a JSON object
    pub fn into_mapping(self) -> ValidationResult<Value> {
        match self {
            MetadataInput::Record(record) => Ok(record.to_value()),
            MetadataInput::Mapping(Value::String(text)) | MetadataInput::Text(text) => {
                parse_text(text)
            }
            MetadataInput::Mapping(value) => require_object(value),
        }
    }
}

fn parse_text(text: String) -> ValidationResult<Value> {
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => require_object(value),
        Err(source) => Err(ValidationError::MalformedInput {
            line: source.line(),
            column: source.column(),
            document: text,
            source,
        }),
    }
}

fn require_object(value: Value) -> ValidationResult<Value> {
    if value.is_object() {
        return Ok(value);
    }
    Err(ValidationError::UnsupportedInputType {
        received: json_type_name(&value).to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Record> for MetadataInput {
    fn from(record: Record) -> Self {
        MetadataInput::Record(record)
    }
}

impl From<&Record> for MetadataInput {
    fn from(record: &Record) -> Self {
        MetadataInput::Record(record.clone())
    }
}

impl From<TimeseriesMetadata> for MetadataInput {
    fn from(record: TimeseriesMetadata) -> Self {
        MetadataInput::Record(record.into())
    }
}

impl From<MicrodataMetadata> for MetadataInput {
    fn from(record: MicrodataMetadata) -> Self {
        MetadataInput::Record(record.into())
    }
}

impl From<Value> for MetadataInput {
    fn from(value: Value) -> Self {
        MetadataInput::Mapping(value)
    }
}

impl From<&Value> for MetadataInput {
    fn from(value: &Value) -> Self {
        MetadataInput::Mapping(value.clone())
    }
}

impl From<String> for MetadataInput {
    fn from(text: String) -> Self {
        MetadataInput::Text(text)
    }
}

impl From<&str> for MetadataInput {
    fn from(text: &str) -> Self {
        MetadataInput::Text(text.to_string())
    }
}

/// Validate metadata against a record kind
///
/// # Examples
///
/// ```rust
/// use metaeditor_schemas::{validate, RecordKind};
/// use serde_json::json;
///
/// let err = validate(json!({}), RecordKind::Timeseries).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "\nmissing: idno field required\nmissing: series_description field required"
/// );
/// ```
pub fn validate<I: Into<MetadataInput>>(input: I, kind: RecordKind) -> ValidationResult<Record> {
    match kind {
        RecordKind::Timeseries => validate_as::<TimeseriesMetadata, _>(input).map(Record::from),
        RecordKind::SurveyMicrodata => {
            validate_as::<MicrodataMetadata, _>(input).map(Record::from)
        }
    }
}

/// Validate metadata against the kind registered under `name`
pub fn validate_named<I: Into<MetadataInput>>(input: I, name: &str) -> ValidationResult<Record> {
    let kind = name.parse::<RecordKind>()?;
    validate(input, kind)
}

/// Validate metadata as a specific entity type
pub fn validate_as<E: Entity, I: Into<MetadataInput>>(input: I) -> ValidationResult<E> {
    let mapping = input.into().into_mapping()?;
    match E::from_value(&mapping) {
        Ok(entity) => {
            debug!(entity = E::NAME, "metadata validated");
            Ok(entity)
        }
        Err(err) => {
            warn!(
                entity = E::NAME,
                violations = err.len(),
                "metadata failed validation"
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_input_is_parsed() {
        let record = validate(
            r#"{"idno": "1", "series_description": {"idno": "1", "name": "n"}}"#,
            RecordKind::Timeseries,
        )
        .unwrap();
        assert_eq!(record.idno(), "1");
    }

    #[test]
    fn test_json_string_value_is_text() {
        let text = Value::String(r#"{"study_desc": {"title_statement": {"idno": "s", "title": "t"}}}"#.to_string());
        let record = validate(text, RecordKind::SurveyMicrodata).unwrap();
        assert_eq!(record.idno(), "s");
    }

    #[test]
    fn test_malformed_text() {
        let err = validate("{\"idno\": ", RecordKind::Timeseries).unwrap_err();
        match err {
            ValidationError::MalformedInput { document, line, .. } => {
                assert_eq!(document, "{\"idno\": ");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_shapes() {
        for (input, received) in [
            (json!(3), "number"),
            (json!([1, 2]), "array"),
            (Value::Null, "null"),
        ] {
            match validate(input, RecordKind::Timeseries).unwrap_err() {
                ValidationError::UnsupportedInputType { received: got } => {
                    assert_eq!(got, received)
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
        let err = validate("[1, 2]", RecordKind::Timeseries).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedInputType { .. }));
    }

    #[test]
    fn test_validate_named_rejects_unknown_kind() {
        let err = validate_named(json!({}), "bad_schema").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSchemaKind { .. }));
    }
}
