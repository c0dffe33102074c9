//! Record kinds and the tagged record type
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::entities::{MicrodataMetadata, TimeseriesMetadata};
use crate::update::FieldUpdates;
use crate::validation::{Entity, FieldType, SchemaViolation, ValidationError};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The record schemas known to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Timeseries (indicator) metadata
    Timeseries,
    /// Survey microdata metadata
    SurveyMicrodata,
}

impl RecordKind {
    /// Every registered kind
    pub const ALL: [RecordKind; 2] = [RecordKind::Timeseries, RecordKind::SurveyMicrodata];

    /// Name of the kind as used by the service's URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Timeseries => "timeseries",
            RecordKind::SurveyMicrodata => "survey",
        }
    }

    /// Names of every registered kind
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(RecordKind::as_str).collect()
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSchemaKind {
                requested: s.to_string(),
                known: Self::names(),
            })
    }
}

/// A validated record of either kind
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Timeseries(Box<TimeseriesMetadata>),
    SurveyMicrodata(Box<MicrodataMetadata>),
}

impl Record {
    /// Which schema this record belongs to
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Timeseries(_) => RecordKind::Timeseries,
            Record::SurveyMicrodata(_) => RecordKind::SurveyMicrodata,
        }
    }

    /// The record's identifier
    pub fn idno(&self) -> &str {
        match self {
            Record::Timeseries(record) => &record.idno,
            Record::SurveyMicrodata(record) => &record.study_desc.title_statement.idno,
        }
    }

    /// Wire form, with unset optional fields left out
    pub fn to_value(&self) -> Value {
        match self {
            Record::Timeseries(record) => record.to_value(),
            Record::SurveyMicrodata(record) => record.to_value(),
        }
    }

    pub fn as_timeseries(&self) -> Option<&TimeseriesMetadata> {
        match self {
            Record::Timeseries(record) => Some(&**record),
            _ => None,
        }
    }

    pub fn as_survey_microdata(&self) -> Option<&MicrodataMetadata> {
        match self {
            Record::SurveyMicrodata(record) => Some(&**record),
            _ => None,
        }
    }

    pub fn into_timeseries(self) -> Option<TimeseriesMetadata> {
        match self {
            Record::Timeseries(record) => Some(*record),
            _ => None,
        }
    }

    pub fn into_survey_microdata(self) -> Option<MicrodataMetadata> {
        match self {
            Record::SurveyMicrodata(record) => Some(*record),
            _ => None,
        }
    }

    /// Apply top-level field updates, see [`crate::merge`]
    pub fn merge(&self, updates: FieldUpdates) -> Result<Record, SchemaViolation> {
        match self {
            Record::Timeseries(record) => crate::merge(&**record, updates).map(Record::from),
            Record::SurveyMicrodata(record) => {
                crate::merge(&**record, updates).map(Record::from)
            }
        }
    }

    /// Wire value of a single top-level field
    pub fn field_value(&self, name: &str) -> Option<Value> {
        match self {
            Record::Timeseries(record) => record.field_value(name),
            Record::SurveyMicrodata(record) => record.field_value(name),
        }
    }
}

impl From<TimeseriesMetadata> for Record {
    fn from(record: TimeseriesMetadata) -> Self {
        Record::Timeseries(Box::new(record))
    }
}

impl From<MicrodataMetadata> for Record {
    fn from(record: MicrodataMetadata) -> Self {
        Record::SurveyMicrodata(Box::new(record))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(RecordKind::names(), vec!["timeseries", "survey"]);
        assert_eq!("survey".parse::<RecordKind>().unwrap(), RecordKind::SurveyMicrodata);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "TimeSeries".parse::<RecordKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "requested schema 'TimeSeries' not in [\"timeseries\", \"survey\"]"
        );
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::from(TimeseriesMetadata {
            idno: "ts-1".to_string(),
            ..Default::default()
        });
        assert_eq!(record.kind(), RecordKind::Timeseries);
        assert_eq!(record.idno(), "ts-1");
        assert!(record.as_survey_microdata().is_none());
        assert_eq!(record.into_timeseries().unwrap().idno, "ts-1");
    }
}
