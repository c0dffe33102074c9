//! The Metadata Editor client
//!
//! [`MetadataEditor`] lists, fetches, creates, updates and deletes projects.
//! Metadata is validated against its record schema before anything is sent,
//! and fetched metadata is decoded into the typed records.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::http::HttpTransport;
use crate::transport::Transport;
use crate::types::{sort_by_created, Project, ProjectEnvelope, ProjectList};
use metaeditor_schemas::{
    merge, validate_as, Entity, FieldUpdates, MetadataInput, MicrodataMetadata, RecordKind,
    TimeseriesMetadata,
};
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, info, instrument, warn};

/// Path of the project listing, also used as the access check
const EDITOR_PATH: &str = "/editor/";

/// Client for the Metadata Editor service
#[derive(Debug, Clone)]
pub struct MetadataEditor<T: Transport = HttpTransport> {
    transport: T,
}

impl MetadataEditor<HttpTransport> {
    /// Connect with the given configuration and verify the API key
    pub async fn connect(config: EditorConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        let editor = Self::with_transport(transport);
        editor.verify_access().await?;
        info!(api_url = %config.api_url, "connected to metadata editor");
        Ok(editor)
    }

    /// Connect using the `METADATA_EDITOR_*` environment variables
    pub async fn from_env() -> Result<Self> {
        Self::connect(EditorConfig::from_env()?).await
    }
}

impl<T: Transport> MetadataEditor<T> {
    /// Wrap an existing transport without contacting the service
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check that the API URL and key are accepted
    pub async fn verify_access(&self) -> Result<()> {
        self.transport.get(EDITOR_PATH).await?;
        Ok(())
    }

    /// All projects visible to the key, oldest first
    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self.transport.get(EDITOR_PATH).await?;
        if !response.get("projects").is_some_and(Value::is_array) {
            return Err(Error::InvalidResponse {
                url: EDITOR_PATH.to_string(),
                message: format!(
                    "response has no 'projects' list: {}",
                    describe_failure(&response)
                ),
            });
        }
        let mut projects = serde_json::from_value::<ProjectList>(response)?.projects;
        sort_by_created(&mut projects);
        debug!(count = projects.len(), "projects listed");
        Ok(projects)
    }

    /// A single project, including its stored metadata
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_project_by_id(&self, id: impl Display) -> Result<Project> {
        let id = id.to_string();
        let path = format!("/editor/{}", id);
        let response = self
            .transport
            .get(&path)
            .await
            .map_err(|e| deny_id(e, &id))?;

        if response.get("project").is_none() {
            return Err(Error::InvalidResponse {
                url: path,
                message: "response has no 'project' field".to_string(),
            });
        }
        Ok(serde_json::from_value::<ProjectEnvelope>(response)?.project)
    }

    /// Fetch a project and decode its metadata as a timeseries record
    pub async fn get_timeseries_by_id(&self, id: impl Display) -> Result<TimeseriesMetadata> {
        self.fetch_record(id.to_string()).await
    }

    /// Fetch a project and decode its metadata as a survey microdata record
    pub async fn get_survey_microdata_by_id(&self, id: impl Display) -> Result<MicrodataMetadata> {
        self.fetch_record(id.to_string()).await
    }

    /// Validate timeseries metadata and create a project from it.
    ///
    /// Returns the service's response body.
    pub async fn create_timeseries(&self, metadata: impl Into<MetadataInput>) -> Result<Value> {
        self.create_record::<TimeseriesMetadata>(RecordKind::Timeseries, metadata.into())
            .await
    }

    /// Validate survey microdata metadata and create a project from it
    pub async fn create_survey_microdata(
        &self,
        metadata: impl Into<MetadataInput>,
    ) -> Result<Value> {
        self.create_record::<MicrodataMetadata>(RecordKind::SurveyMicrodata, metadata.into())
            .await
    }

    /// Replace the given top-level fields of a stored timeseries record
    pub async fn update_timeseries_by_id(
        &self,
        id: impl Display,
        updates: FieldUpdates,
    ) -> Result<Value> {
        self.update_record::<TimeseriesMetadata>(RecordKind::Timeseries, id.to_string(), updates)
            .await
    }

    /// Replace the given top-level fields of a stored survey microdata record
    pub async fn update_survey_microdata_by_id(
        &self,
        id: impl Display,
        updates: FieldUpdates,
    ) -> Result<Value> {
        self.update_record::<MicrodataMetadata>(
            RecordKind::SurveyMicrodata,
            id.to_string(),
            updates,
        )
        .await
    }

    /// Delete a project and confirm it is gone
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn delete_project_by_id(&self, id: impl Display) -> Result<()> {
        let id = id.to_string();
        self.get_project_by_id(&id).await?;

        // The service may answer a successful delete with an empty body
        match self
            .transport
            .post(&format!("/editor/delete/{}", id), &Value::Object(Default::default()))
            .await
        {
            Ok(_) | Err(Error::InvalidResponse { .. }) => {}
            Err(e) => return Err(deny_id(e, &id)),
        }

        match self.get_project_by_id(&id).await {
            Ok(_) => {
                warn!("project still present after delete");
                Err(Error::DeleteNotApplied { id })
            }
            Err(e) if e.is_missing_project() => {
                info!("project deleted");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_record<E: Entity>(&self, id: String) -> Result<E> {
        let project = self.get_project_by_id(&id).await?;
        let metadata = project.metadata().ok_or_else(|| Error::InvalidResponse {
            url: format!("/editor/{}", id),
            message: "project has no 'metadata' field".to_string(),
        })?;
        Ok(validate_as::<E, _>(metadata)?)
    }

    async fn create_record<E: Entity>(&self, kind: RecordKind, input: MetadataInput) -> Result<Value> {
        let record = validate_as::<E, _>(input)?;
        let response = self
            .transport
            .post(&format!("/editor/create/{}", kind), &record.to_value())
            .await?;
        info!(kind = %kind, "project created");
        Ok(response)
    }

    async fn update_record<E: Entity>(
        &self,
        kind: RecordKind,
        id: String,
        updates: FieldUpdates,
    ) -> Result<Value> {
        let original = self.fetch_record::<E>(id.clone()).await?;
        let merged = merge(&original, updates)?;
        let record = validate_as::<E, _>(merged.to_value())?;

        let response = self
            .transport
            .post(&format!("/editor/update/{}/{}", kind, id), &record.to_value())
            .await
            .map_err(|e| deny_id(e, &id))?;
        info!(kind = %kind, id = %id, "project updated");
        Ok(response)
    }
}

/// The service's own `message`, when a body carries one
fn describe_failure(response: &Value) -> String {
    response
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message")
        .to_string()
}

/// The service answers 400 when an id is unknown or belongs to someone else
fn deny_id(error: Error, id: &str) -> Error {
    match error {
        Error::Request {
            status: Some(400), ..
        } => Error::IdDenied { id: id.to_string() },
        other => other,
    }
}
