//! Entities shared by both record kinds
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::validation::Uri;

entity! {
    /// Person or organization that produced the metadata
    pub struct Producer {
        name: Option<String>,
        abbr: Option<String>,
        affiliation: Option<String>,
        role: Option<String>,
    }
}

entity! {
    pub struct VersionStatement {
        version: Option<String>,
        version_date: Option<String>,
        /// Organization or person responsible for the version
        version_resp: Option<String>,
        version_notes: Option<String>,
    }
}

entity! {
    pub struct AuthoringEntity {
        name: String,
        affiliation: Option<String>,
        abbreviation: Option<String>,
        email: Option<String>,
        uri: Option<String>,
    }
}

entity! {
    pub struct Keyword {
        name: String,
        vocabulary: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    /// Geographic bounding box, coordinates kept as supplied
    pub struct BboxItem {
        west: Option<String>,
        east: Option<String>,
        south: Option<String>,
        north: Option<String>,
    }
}

entity! {
    pub struct Contact {
        name: Option<String>,
        role: Option<String>,
        position: Option<String>,
        affiliation: Option<String>,
        email: Option<String>,
        telephone: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    /// Where a harvested record came from
    pub struct OriginDescription {
        /// Harvest date in UTC date format
        harvest_date: Option<String>,
        /// Whether the metadata was altered before dissemination
        altered: Option<bool>,
        base_url: Option<String>,
        identifier: Option<String>,
        date_stamp: Option<String>,
        metadata_namespace: Option<String>,
    }
}

entity! {
    /// Provenance of harvested metadata, after the OAI provenance schema
    pub struct Provenance {
        origin_description: OriginDescription,
    }
}

entity! {
    pub struct Tag {
        tag: Option<String>,
        tag_group: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Entity, FieldType, ViolationKind};
    use serde_json::json;

    #[test]
    fn test_provenance_requires_origin_description() {
        let err = Provenance::from_value(&json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\nmissing: origin_description field required"
        );
    }

    #[test]
    fn test_extra_fields_are_reported_after_declared_fields() {
        let err = Keyword::from_value(&json!({"colour": "red", "vocabulary": 3})).unwrap_err();
        assert_eq!(err.len(), 3);
        assert_eq!(err.violations[0].kind, ViolationKind::Missing);
        assert_eq!(err.violations[1].kind, ViolationKind::StringType);
        assert_eq!(err.violations[2].kind, ViolationKind::ExtraForbidden);
        assert_eq!(err.violations[2].path.to_string(), "colour");
    }

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let tag = Tag {
            tag: Some("gdp".to_string()),
            ..Default::default()
        };
        assert_eq!(tag.to_value(), json!({"tag": "gdp"}));
        assert_eq!(serde_json::to_value(&tag).unwrap(), json!({"tag": "gdp"}));
    }

    #[test]
    fn test_non_object_is_model_type() {
        let err = Provenance::from_value(&json!({"origin_description": "harvested"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\nmodel_type: origin_description input should be a valid dictionary or instance of origindescription"
        );
    }

    #[test]
    fn test_set_field_checks_value() {
        let mut origin = OriginDescription::default();
        origin.set_field("altered", &json!(true)).unwrap();
        assert_eq!(origin.altered, Some(true));

        let err = origin.set_field("altered", &json!("yes")).unwrap_err();
        assert!(err.contains(ViolationKind::BoolType, "altered"));
        assert_eq!(origin.altered, Some(true));

        let err = origin.set_field("colour", &json!("red")).unwrap_err();
        assert!(err.contains(ViolationKind::ExtraForbidden, "colour"));
    }

    #[test]
    fn test_field_introspection() {
        assert_eq!(Tag::field_names(), &["tag", "tag_group"]);
        let tag = Tag {
            tag_group: Some("economy".to_string()),
            ..Default::default()
        };
        assert_eq!(tag.field_value("tag_group"), Some(json!("economy")));
        assert_eq!(tag.field_value("tag"), None);
        assert_eq!(tag.field_value("unknown"), None);
    }
}
