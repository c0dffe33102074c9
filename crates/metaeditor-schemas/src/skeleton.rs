//! Minimal placeholder records
//!
//! A skeleton fills every required field with a placeholder and leaves every
//! optional field unset, so it shows the mandatory shape of a record kind and
//! always validates.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::entities::{MicrodataMetadata, TimeseriesMetadata};
use crate::record::{Record, RecordKind};
use crate::validation::FieldType;

/// Build a skeleton of `kind` carrying the given identity
pub fn skeleton(kind: RecordKind, idno: &str, name_or_title: &str) -> Record {
    match kind {
        RecordKind::Timeseries => timeseries_skeleton(idno, name_or_title).into(),
        RecordKind::SurveyMicrodata => survey_microdata_skeleton(idno, name_or_title).into(),
    }
}

/// Timeseries skeleton; `idno` is written at the top level and in the series description
pub fn timeseries_skeleton(idno: &str, name: &str) -> TimeseriesMetadata {
    let mut record = TimeseriesMetadata::placeholder();
    record.idno = idno.to_string();
    record.series_description.idno = idno.to_string();
    record.series_description.name = name.to_string();
    record
}

pub fn survey_microdata_skeleton(idno: &str, title: &str) -> MicrodataMetadata {
    let mut record = MicrodataMetadata::placeholder();
    record.study_desc.title_statement.idno = idno.to_string();
    record.study_desc.title_statement.title = title.to_string();
    record
}
