//! Client behaviour against a scripted in-memory transport
//!
//! Each test queues the responses the service would give and then checks
//! both the outcome and the requests the client sent.

use metaeditor_core::{Error, FieldUpdates, MetadataEditor, RecordKind, Result, Transport};
use metaeditor_schemas::{skeleton, ValidationError, ViolationKind};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request the client sent
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Get(String),
    Post(String, Value),
}

/// Transport answering from a queue of scripted responses
#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    fn respond(self, response: Result<Value>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    fn ok(self, body: Value) -> Self {
        self.respond(Ok(body))
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Result<Value> {
        self.calls.lock().unwrap().push(call.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {:?}", call))
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.next(Call::Get(path.to_string()))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.next(Call::Post(path.to_string(), body.clone()))
    }
}

fn bad_request() -> Error {
    Error::Request {
        message: "You don't have permission to access this project".to_string(),
        status: Some(400),
        source: None,
    }
}

fn timeseries_metadata() -> Value {
    json!({
        "idno": "TS-001",
        "series_description": {"idno": "TS-001", "name": "GDP growth"}
    })
}

fn project(id: u64, metadata: Value) -> Value {
    json!({
        "project": {
            "id": id,
            "type": "timeseries",
            "created": "2024-06-11T09:58:14+00:00",
            "metadata": metadata
        }
    })
}

#[tokio::test]
async fn verify_access_gets_editor_listing() {
    let transport = ScriptedTransport::default().ok(json!({"projects": []}));
    let editor = MetadataEditor::with_transport(transport);

    editor.verify_access().await.unwrap();
    assert_eq!(
        editor.transport().calls(),
        vec![Call::Get("/editor/".to_string())]
    );
}

#[tokio::test]
async fn verify_access_surfaces_permission_denied() {
    let transport = ScriptedTransport::default().respond(Err(Error::PermissionDenied {
        url: "https://example.com/editor/".to_string(),
    }));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.verify_access().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Access to that URL is denied. Check that the API key is correct"
    );
}

#[tokio::test]
async fn list_projects_sorts_by_created() {
    let transport = ScriptedTransport::default().ok(json!({
        "status": "success",
        "projects": [
            {"id": 2, "created": "2024-06-12T10:00:00+00:00", "title": "second"},
            {"id": "1", "created": "2024-06-11T10:00:00+00:00", "title": "first"},
            {"id": 3, "title": "undated"}
        ]
    }));
    let editor = MetadataEditor::with_transport(transport);

    let projects = editor.list_projects().await.unwrap();
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(projects[0].fields["title"], "first");
}

#[tokio::test]
async fn list_projects_rejects_body_without_projects() {
    let transport =
        ScriptedTransport::default().ok(json!({"status": "failed", "message": "boom"}));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.list_projects().await.unwrap_err();
    match err {
        Error::InvalidResponse { url, message } => {
            assert_eq!(url, "/editor/");
            assert!(message.contains("boom"));
        }
        other => panic!("expected an invalid response, got {:?}", other),
    }
}

#[tokio::test]
async fn list_projects_keeps_numeric_timestamps() {
    let transport = ScriptedTransport::default().ok(json!({
        "projects": [
            {"id": 2, "created": 1718186294},
            {"id": 1, "created": 1718099894}
        ]
    }));
    let editor = MetadataEditor::with_transport(transport);

    let projects = editor.list_projects().await.unwrap();
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn get_project_maps_bad_request_to_id_denied() {
    let transport = ScriptedTransport::default().respond(Err(bad_request()));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.get_project_by_id(9999).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Access to this id is denied. Check that the id '9999' is correct"
    );
    assert_eq!(
        editor.transport().calls(),
        vec![Call::Get("/editor/9999".to_string())]
    );
}

#[tokio::test]
async fn get_project_without_project_field_is_invalid() {
    let transport = ScriptedTransport::default().ok(json!({"status": "success"}));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.get_project_by_id(1).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
}

#[tokio::test]
async fn get_timeseries_decodes_metadata() {
    let transport = ScriptedTransport::default().ok(project(12, timeseries_metadata()));
    let editor = MetadataEditor::with_transport(transport);

    let record = editor.get_timeseries_by_id(12).await.unwrap();
    assert_eq!(record.idno, "TS-001");
    assert_eq!(record.series_description.name, "GDP growth");
}

#[tokio::test]
async fn get_survey_rejects_timeseries_metadata() {
    let transport = ScriptedTransport::default().ok(project(12, timeseries_metadata()));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.get_survey_microdata_by_id(12).await.unwrap_err();
    match err {
        Error::Validation(ValidationError::Schema(violations)) => {
            assert!(violations.contains(ViolationKind::Missing, "study_desc"));
            assert!(violations.contains(ViolationKind::ExtraForbidden, "series_description"));
        }
        other => panic!("expected a schema violation, got {:?}", other),
    }
}

#[tokio::test]
async fn create_timeseries_validates_then_posts() {
    let transport = ScriptedTransport::default().ok(json!({"status": "success", "id": 12}));
    let editor = MetadataEditor::with_transport(transport);

    let response = editor.create_timeseries(timeseries_metadata()).await.unwrap();
    assert_eq!(response["id"], 12);
    assert_eq!(
        editor.transport().calls(),
        vec![Call::Post(
            "/editor/create/timeseries".to_string(),
            timeseries_metadata()
        )]
    );
}

#[tokio::test]
async fn create_with_invalid_metadata_sends_nothing() {
    let transport = ScriptedTransport::default();
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.create_timeseries(json!({})).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nmissing: idno field required\nmissing: series_description field required"
    );
    assert!(editor.transport().calls().is_empty());
}

#[tokio::test]
async fn create_accepts_json_text() {
    let transport = ScriptedTransport::default().ok(json!({"status": "success"}));
    let editor = MetadataEditor::with_transport(transport);

    let text = timeseries_metadata().to_string();
    editor.create_timeseries(text.as_str()).await.unwrap();

    let err = editor.create_timeseries("not json").await.unwrap_err();
    assert_eq!(err.to_string(), "This string is not valid json: 'not json'");
}

#[tokio::test]
async fn create_survey_posts_to_survey_path() {
    let blank = skeleton(RecordKind::SurveyMicrodata, "SRV-1", "Household survey");
    let transport = ScriptedTransport::default().ok(json!({"status": "success"}));
    let editor = MetadataEditor::with_transport(transport);

    editor.create_survey_microdata(&blank).await.unwrap();
    assert_eq!(
        editor.transport().calls(),
        vec![Call::Post("/editor/create/survey".to_string(), blank.to_value())]
    );
}

#[tokio::test]
async fn update_replaces_top_level_fields_only() {
    let stored = json!({
        "idno": "TS-001",
        "series_description": {"idno": "TS-001", "name": "GDP growth", "doi": "10.1/abc"},
        "tags": [{"tag": "economy"}]
    });
    let transport = ScriptedTransport::default()
        .ok(project(12, stored))
        .ok(json!({"status": "success"}));
    let editor = MetadataEditor::with_transport(transport);

    let updates = FieldUpdates::new()
        .set_value("series_description", json!({"idno": "TS-001", "name": "GDP"}))
        .maybe::<String>("idno", None);
    editor.update_timeseries_by_id(12, updates).await.unwrap();

    let calls = editor.transport().calls();
    assert_eq!(calls[0], Call::Get("/editor/12".to_string()));
    assert_eq!(
        calls[1],
        Call::Post(
            "/editor/update/timeseries/12".to_string(),
            json!({
                "idno": "TS-001",
                "series_description": {"idno": "TS-001", "name": "GDP"},
                "tags": [{"tag": "economy"}]
            })
        )
    );
}

#[tokio::test]
async fn update_with_bad_value_sends_nothing() {
    let transport = ScriptedTransport::default().ok(project(12, timeseries_metadata()));
    let editor = MetadataEditor::with_transport(transport);

    let updates = FieldUpdates::new()
        .set_value("idno", json!(17))
        .set_value("colour", json!("blue"));
    let err = editor.update_timeseries_by_id(12, updates).await.unwrap_err();

    let violations = match &err {
        Error::Validation(ValidationError::Schema(violations)) => violations,
        other => panic!("expected a schema violation, got {:?}", other),
    };
    assert!(violations.contains(ViolationKind::StringType, "idno"));
    assert!(violations.contains(ViolationKind::ExtraForbidden, "colour"));
    assert_eq!(editor.transport().calls().len(), 1);
}

#[tokio::test]
async fn update_of_unknown_id_is_id_denied() {
    let transport = ScriptedTransport::default().respond(Err(bad_request()));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor
        .update_survey_microdata_by_id("404", FieldUpdates::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::IdDenied { id } if id == "404"));
}

#[tokio::test]
async fn delete_confirms_the_project_is_gone() {
    let transport = ScriptedTransport::default()
        .ok(project(5, timeseries_metadata()))
        .ok(json!({"status": "success"}))
        .respond(Err(bad_request()));
    let editor = MetadataEditor::with_transport(transport);

    editor.delete_project_by_id(5).await.unwrap();
    assert_eq!(
        editor.transport().calls(),
        vec![
            Call::Get("/editor/5".to_string()),
            Call::Post("/editor/delete/5".to_string(), json!({})),
            Call::Get("/editor/5".to_string()),
        ]
    );
}

#[tokio::test]
async fn delete_tolerates_non_json_answer() {
    let transport = ScriptedTransport::default()
        .ok(project(5, timeseries_metadata()))
        .respond(Err(Error::InvalidResponse {
            url: "https://example.com/editor/delete/5".to_string(),
            message: "Response is not valid JSON".to_string(),
        }))
        .respond(Err(Error::NotFound {
            url: "https://example.com/editor/5".to_string(),
        }));
    let editor = MetadataEditor::with_transport(transport);

    editor.delete_project_by_id(5).await.unwrap();
}

#[tokio::test]
async fn delete_reports_project_still_present() {
    let transport = ScriptedTransport::default()
        .ok(project(5, timeseries_metadata()))
        .ok(json!({"status": "success"}))
        .ok(project(5, timeseries_metadata()));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.delete_project_by_id(5).await.unwrap_err();
    assert!(matches!(err, Error::DeleteNotApplied { id } if id == "5"));
}

#[tokio::test]
async fn delete_of_unknown_id_stops_before_posting() {
    let transport = ScriptedTransport::default().respond(Err(bad_request()));
    let editor = MetadataEditor::with_transport(transport);

    let err = editor.delete_project_by_id(77).await.unwrap_err();
    assert!(matches!(err, Error::IdDenied { .. }));
    assert_eq!(editor.transport().calls().len(), 1);
}
