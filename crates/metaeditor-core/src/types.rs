//! Project records as the service reports them
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A project stored on the Metadata Editor service.
///
/// Only `id` and `created` are interpreted; everything else the service
/// sends (`type`, `idno`, `title`, `metadata`, ...) is kept in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project id; the service sends it as a number or a string
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,

    /// Creation time, `None` when absent or not in a recognised format
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<FixedOffset>>,

    /// Remaining project fields, in service order
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Project {
    /// The stored metadata document, if the service included it
    pub fn metadata(&self) -> Option<&Value> {
        self.fields.get("metadata")
    }

    /// The record kind as the service names it, e.g. `"timeseries"`
    pub fn project_type(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    /// The record identity string, if reported
    pub fn idno(&self) -> Option<&str> {
        self.fields.get("idno").and_then(Value::as_str)
    }
}

/// Body of `GET /editor/`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

/// Body of `GET /editor/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEnvelope {
    pub project: Project,
}

/// Sort oldest first; projects without a timestamp go last
pub fn sort_by_created(projects: &mut [Project]) {
    projects.sort_by(|a, b| match (&a.created, &b.created) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "project id should be a string or a number, got {}",
            other
        ))),
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => parse_timestamp(&raw),
        // unix seconds
        Value::Number(secs) => secs
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|utc| utc.fixed_offset()),
        _ => None,
    })
}

/// Parse RFC 3339 or the service's `YYYY-MM-DD HH:MM:SS` form (read as UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}
