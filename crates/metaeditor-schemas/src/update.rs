//! Partial updates of validated records
//!
//! Updates replace whole top-level fields. Nested entities are never merged
//! field by field: replacing `series_description` replaces all of it.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::validation::{Entity, FieldType, SchemaViolation};
use serde_json::{Map, Value};
use tracing::debug;

/// Ordered set of top-level field updates.
///
/// An entry whose value is `None` (or JSON `null`) means "leave the field
/// as it is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdates {
    entries: Vec<(String, Option<Value>)>,
}

impl FieldUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `name` with a typed value
    pub fn set<T: FieldType>(self, name: impl Into<String>, value: T) -> Self {
        self.set_value(name, value.to_value())
    }

    /// Replace `name` with a raw wire value; it is checked when merged
    pub fn set_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.entries.push((name.into(), Some(value)));
        self
    }

    /// Replace `name` only if `value` is present
    pub fn maybe<T: FieldType>(mut self, name: impl Into<String>, value: Option<T>) -> Self {
        self.entries
            .push((name.into(), value.map(|value| value.to_value())));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the fields that will actually be replaced
    pub fn present_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.as_ref().is_some_and(|value| !value.is_null()))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl IntoIterator for FieldUpdates {
    type Item = (String, Option<Value>);
    type IntoIter = std::vec::IntoIter<(String, Option<Value>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Value>)> for FieldUpdates {
    fn from_iter<I: IntoIterator<Item = (K, Option<Value>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl From<Map<String, Value>> for FieldUpdates {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().map(|(name, value)| (name, Some(value))).collect()
    }
}

/// Copy `original` and replace each field that has a present update.
///
/// Every replacement is checked like a single-field assignment; all
/// violations are collected before failing. `original` is left untouched
/// and the result is not revalidated as a whole.
pub fn merge<E, K, I>(original: &E, updates: I) -> Result<E, SchemaViolation>
where
    E: Entity,
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Option<Value>)>,
{
    let mut merged = original.clone();
    let mut violations = Vec::new();
    let mut applied = 0usize;

    for (name, value) in updates {
        let Some(value) = value else { continue };
        if value.is_null() {
            continue;
        }
        match merged.set_field(name.as_ref(), &value) {
            Ok(()) => applied += 1,
            Err(err) => violations.extend(err.violations),
        }
    }

    if !violations.is_empty() {
        return Err(SchemaViolation::from(violations));
    }
    debug!(entity = E::NAME, applied, "merged field updates");
    Ok(merged)
}
