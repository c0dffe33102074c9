//! Validation error types for timeseries and survey microdata records
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::validation::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The class of contract breach a [`Violation`] describes.
///
/// The string forms are part of the rendered error message and are matched
/// literally by callers, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent
    Missing,
    /// Expected a string
    StringType,
    /// Expected an integer
    IntType,
    /// Expected an integer, got a float with a fractional part
    IntFromFloat,
    /// Expected a number
    FloatType,
    /// Expected a boolean
    BoolType,
    /// Expected a list
    ListType,
    /// Expected a free-form mapping
    DictType,
    /// Expected a nested entity
    ModelType,
    /// Expected a string holding a URL
    UrlType,
    /// The URL string does not parse
    UrlParsing,
    /// An enumerated string is outside its allowed set
    StringPatternMismatch,
    /// The field is not part of the entity
    ExtraForbidden,
}

impl ViolationKind {
    /// Stable machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Missing => "missing",
            ViolationKind::StringType => "string_type",
            ViolationKind::IntType => "int_type",
            ViolationKind::IntFromFloat => "int_from_float",
            ViolationKind::FloatType => "float_type",
            ViolationKind::BoolType => "bool_type",
            ViolationKind::ListType => "list_type",
            ViolationKind::DictType => "dict_type",
            ViolationKind::ModelType => "model_type",
            ViolationKind::UrlType => "url_type",
            ViolationKind::UrlParsing => "url_parsing",
            ViolationKind::StringPatternMismatch => "string_pattern_mismatch",
            ViolationKind::ExtraForbidden => "extra_forbidden",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level contract breach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// What kind of breach this is
    pub kind: ViolationKind,
    /// Location of the offending field
    pub path: FieldPath,
    /// Human-readable message, as produced (not yet lower-cased)
    pub message: String,
}

impl Violation {
    /// Create a new violation
    pub fn new<M: Into<String>>(kind: ViolationKind, path: FieldPath, message: M) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.kind,
            self.path,
            self.message.to_lowercase()
        )
    }
}

/// One or more violations collected over a whole record tree.
///
/// Renders as a leading newline followed by one violation per line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct SchemaViolation {
    /// Every violation found, in traversal order
    pub violations: Vec<Violation>,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            write!(f, "\n{}", violation)?;
        }
        Ok(())
    }
}

impl SchemaViolation {
    /// Number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether no violation was recorded
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterate over the violations
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Whether a violation of `kind` exists at the dotted `path`
    pub fn contains(&self, kind: ViolationKind, path: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind == kind && v.path.to_string() == path)
    }
}

impl From<Violation> for SchemaViolation {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl From<Vec<Violation>> for SchemaViolation {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

/// Errors raised when validating metadata against a record kind
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more field-level violations
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    /// Text input that is not valid JSON
    #[error("This string is not valid json: '{document}'")]
    MalformedInput {
        /// The text that failed to parse
        document: String,
        /// 1-based line of the parse failure
        line: usize,
        /// 1-based column of the parse failure
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Input that is neither a record, a mapping nor JSON text
    #[error(
        "Metadata must be passed as a record, a JSON object or a JSON string, but {received} was passed instead"
    )]
    UnsupportedInputType {
        /// Name of the shape that was received
        received: String,
    },

    /// The requested record kind is not registered
    #[error("requested schema '{requested}' not in {known:?}")]
    UnknownSchemaKind {
        /// The name the caller asked for
        requested: String,
        /// The registered record kind names
        known: Vec<&'static str>,
    },
}

impl ValidationError {
    /// The field-level violations, if this is a schema error
    pub fn violations(&self) -> Option<&SchemaViolation> {
        match self {
            ValidationError::Schema(schema) => Some(schema),
            _ => None,
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
