//! Unit tests for survey microdata validation

use metaeditor_schemas::entities::{AccessPolicy, GroupType, VarInterval};
use metaeditor_schemas::{validate, validate_as, MicrodataMetadata, RecordKind, ViolationKind};
use serde_json::json;

fn minimal_survey() -> serde_json::Value {
    json!({
        "study_desc": {
            "title_statement": {"idno": "KEN_2020_HBS", "title": "Household Budget Survey 2020"}
        }
    })
}

#[cfg(test)]
mod required_fields {
    use super::*;

    #[test]
    fn test_empty_mapping() {
        let err = validate(json!({}), RecordKind::SurveyMicrodata).unwrap_err();
        assert_eq!(err.to_string(), "\nmissing: study_desc field required");
    }

    #[test]
    fn test_title_statement_fields() {
        let err = validate(
            json!({"study_desc": {"title_statement": {}}}),
            RecordKind::SurveyMicrodata,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "\nmissing: study_desc.title_statement.idno field required\
             \nmissing: study_desc.title_statement.title field required"
        );
    }

    #[test]
    fn test_minimal_survey_is_valid() {
        let record = validate(minimal_survey(), RecordKind::SurveyMicrodata).unwrap();
        assert_eq!(record.idno(), "KEN_2020_HBS");
        assert_eq!(record.to_value(), minimal_survey());
    }
}

#[cfg(test)]
mod nested_entities {
    use super::*;

    #[test]
    fn test_variables_report_indexed_paths() {
        let mut input = minimal_survey();
        input["variables"] = json!([
            {"file_id": "F1", "vid": "V1", "name": "age", "labl": "Age", "var_intrvl": "contin"},
            {"file_id": "F1", "vid": "V2", "name": "sex", "labl": "Sex", "var_intrvl": "categorical",
             "loc_width": "2", "var_format": {"type": "text"}}
        ]);
        let err = validate(input, RecordKind::SurveyMicrodata).unwrap_err();
        let schema = err.violations().unwrap();
        assert_eq!(schema.len(), 3);
        assert!(schema.contains(ViolationKind::StringPatternMismatch, "variables.1.var_intrvl"));
        assert!(schema.contains(ViolationKind::IntType, "variables.1.loc_width"));
        assert!(schema.contains(ViolationKind::StringPatternMismatch, "variables.1.var_format.type"));
    }

    #[test]
    fn test_full_survey() {
        let mut input = minimal_survey();
        input["repositoryid"] = json!("central");
        input["access_policy"] = json!("licensed");
        input["published"] = json!(1);
        input["overwrite"] = json!("yes");
        input["study_desc"]["study_info"] = json!({
            "abstract": "Consumption and expenditure",
            "nation": [{"name": "Kenya", "abbreviation": "KEN"}],
            "keywords": [{"name": "consumption"}],
            "coll_dates": [{"start": "2020-01", "end": "2020-12"}]
        });
        input["data_files"] = json!([{"file_id": "F1", "file_name": "household", "case_count": 12000}]);
        input["variable_groups"] = json!([{"vgid": "VG1", "variables": "V1 V2", "group_type": "section"}]);
        input["embeddings"] = json!([{"id": "minilm", "vector": [0.25, -0.5, 1]}]);

        let survey: MicrodataMetadata = validate_as(input).unwrap();
        assert_eq!(survey.access_policy, Some(AccessPolicy::Licensed));
        assert_eq!(survey.data_files.as_ref().unwrap()[0].case_count, Some(12000));
        assert_eq!(
            survey.variable_groups.as_ref().unwrap()[0].group_type,
            Some(GroupType::Section)
        );
        assert_eq!(survey.embeddings.as_ref().unwrap()[0].vector, vec![0.25, -0.5, 1.0]);
        let info = survey.study_desc.study_info.as_ref().unwrap();
        assert_eq!(info.nation.as_ref().unwrap()[0].name, "Kenya");
    }

    #[test]
    fn test_access_policy_pattern() {
        let mut input = minimal_survey();
        input["access_policy"] = json!("closed");
        let err = validate(input, RecordKind::SurveyMicrodata).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\nstring_pattern_mismatch: access_policy string should match pattern \
             '^(direct|open|public|licensed|data_enclave|data_na|no_access)$'"
        );
    }

    #[test]
    fn test_timeseries_fields_are_unknown_to_surveys() {
        let mut input = minimal_survey();
        input["series_description"] = json!({"idno": "x", "name": "y"});
        let err = validate(input, RecordKind::SurveyMicrodata).unwrap_err();
        assert!(err
            .violations()
            .unwrap()
            .contains(ViolationKind::ExtraForbidden, "series_description"));
    }

    #[test]
    fn test_var_interval_choice() {
        assert_eq!(VarInterval::from_wire("discrete"), Some(VarInterval::Discrete));
        assert_eq!(VarInterval::default(), VarInterval::Discrete);
    }
}
