//! Timeseries (indicator) record schema
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use super::common::{
    AuthoringEntity, BboxItem, Contact, Keyword, Producer, Provenance, Tag, VersionStatement,
};
use crate::validation::{Additional, Uri};

entity! {
    pub struct MetadataInformation {
        title: Option<String>,
        idno: Option<String>,
        producers: Option<Vec<Producer>>,
        prod_date: Option<String>,
        version_statement: Option<VersionStatement>,
    }
}

entity! {
    /// Alternative name of a series; an alias entry must carry the alias
    pub struct Alias {
        alias: String,
    }
}

entity! {
    pub struct AlternateIdentifier {
        identifier: String,
        name: Option<String>,
        database: Option<String>,
        uri: Option<String>,
        notes: Option<String>,
    }
}

entity! {
    pub struct Language {
        name: Option<String>,
        code: Option<String>,
    }
}

entity! {
    pub struct Dimension {
        name: Option<String>,
        label: String,
        description: Option<String>,
    }
}

entity! {
    /// Reference to an external document
    pub struct Reference {
        source: Option<String>,
        uri: Uri,
        note: Option<String>,
    }
}

entity! {
    pub struct Concept {
        name: String,
        definition: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct DataCollection {
        data_source: Option<String>,
        method: Option<String>,
        period: Option<String>,
        note: Option<String>,
        uri: Option<String>,
    }
}

entity! {
    /// Entry of a controlled vocabulary (themes, topics, disciplines)
    pub struct Vocabulary {
        id: Option<String>,
        name: String,
        parent_id: Option<String>,
        vocabulary: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct Mandate {
        mandate: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct TimePeriod {
        start: Option<String>,
        end: Option<String>,
        notes: Option<String>,
    }
}

entity! {
    pub struct RefCountry {
        name: Option<String>,
        code: Option<String>,
    }
}

entity! {
    pub struct GeographicUnit {
        name: String,
        code: Option<String>,
        r#type as "type": Option<String>,
    }
}

entity! {
    pub struct Link {
        r#type as "type": Option<String>,
        description: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct ApiDocumentation {
        description: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct OtherIdentifier {
        r#type as "type": Option<String>,
        identifier: Option<String>,
    }
}

entity! {
    pub struct AuthorId {
        r#type as "type": Option<String>,
        id: Option<String>,
    }
}

entity! {
    pub struct Author {
        first_name: Option<String>,
        initial: Option<String>,
        last_name: Option<String>,
        affiliation: Option<String>,
        author_id: Option<Vec<AuthorId>>,
        full_name: Option<String>,
    }
}

entity! {
    pub struct Dataset {
        idno: Option<String>,
        title: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    /// Source the series data was taken from
    pub struct Source {
        idno: Option<String>,
        other_identifiers: Option<Vec<OtherIdentifier>>,
        r#type as "type": Option<String>,
        name: String,
        organization: Option<String>,
        authors: Option<Vec<Author>>,
        datasets: Option<Vec<Dataset>>,
        publisher: Option<String>,
        publication_date: Option<String>,
        uri: Option<Uri>,
        access_date: Option<String>,
        note: Option<String>,
    }
}

entity! {
    pub struct Acronym {
        acronym: String,
        expansion: String,
        occurrence: Option<i64>,
    }
}

entity! {
    pub struct Erratum {
        date: Option<String>,
        description: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct Acknowledgement {
        name: Option<String>,
        affiliation: Option<String>,
        role: Option<String>,
    }
}

entity! {
    pub struct Note {
        note: Option<String>,
        r#type as "type": Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct RelatedIndicator {
        code: Option<String>,
        label: Option<String>,
        uri: Option<Uri>,
        relationship: Option<String>,
        r#type as "type": Option<String>,
    }
}

entity! {
    pub struct Compliance {
        standard: String,
        abbreviation: Option<String>,
        custodian: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    /// Position of the series in a goal/target/indicator framework such as the SDGs
    pub struct Framework {
        name: String,
        abbreviation: Option<String>,
        custodian: Option<String>,
        description: Option<String>,
        goal_id: Option<String>,
        goal_name: Option<String>,
        goal_description: Option<String>,
        target_id: Option<String>,
        target_name: Option<String>,
        target_description: Option<String>,
        indicator_id: Option<String>,
        indicator_name: Option<String>,
        indicator_description: Option<String>,
        uri: Option<Uri>,
        notes: Option<String>,
    }
}

entity! {
    pub struct SeriesGroup {
        name: Option<String>,
        description: Option<String>,
        version: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    /// Descriptive metadata of a single series
    pub struct SeriesDescription {
        idno: String,
        doi: Option<String>,
        name: String,
        display_name: Option<String>,
        authoring_entity: Option<Vec<AuthoringEntity>>,
        database_id: Option<String>,
        database_name: Option<String>,
        date_last_update: Option<String>,
        date_released: Option<String>,
        version_statement: Option<VersionStatement>,
        aliases: Option<Vec<Alias>>,
        alternate_identifiers: Option<Vec<AlternateIdentifier>>,
        languages: Option<Vec<Language>>,
        measurement_unit: Option<String>,
        dimensions: Option<Vec<Dimension>>,
        release_calendar: Option<String>,
        periodicity: Option<String>,
        base_period: Option<String>,
        definition_short: Option<String>,
        definition_long: Option<String>,
        definition_references: Option<Vec<Reference>>,
        statistical_concept: Option<String>,
        statistical_concept_references: Option<Vec<Reference>>,
        concepts: Option<Vec<Concept>>,
        data_collection: Option<DataCollection>,
        methodology: Option<String>,
        methodology_references: Option<Vec<Reference>>,
        derivation: Option<String>,
        derivation_references: Option<Vec<Reference>>,
        imputation: Option<String>,
        imputation_references: Option<Vec<Reference>>,
        adjustments: Option<Vec<String>>,
        missing: Option<String>,
        validation_rules: Option<Vec<String>>,
        quality_checks: Option<String>,
        quality_note: Option<String>,
        sources_discrepancies: Option<String>,
        series_break: Option<String>,
        limitation: Option<String>,
        themes: Option<Vec<Vocabulary>>,
        topics: Option<Vec<Vocabulary>>,
        disciplines: Option<Vec<Vocabulary>>,
        relevance: Option<String>,
        mandate: Option<Mandate>,
        time_periods: Option<Vec<TimePeriod>>,
        ref_country: Option<Vec<RefCountry>>,
        geographic_units: Option<Vec<GeographicUnit>>,
        bbox: Option<Vec<BboxItem>>,
        aggregation_method: Option<String>,
        aggregation_method_references: Option<Vec<Reference>>,
        disaggregation: Option<String>,
        license: Option<Vec<Reference>>,
        confidentiality: Option<String>,
        confidentiality_status: Option<String>,
        confidentiality_note: Option<String>,
        citation_requirement: Option<String>,
        links: Option<Vec<Link>>,
        api_documentation: Option<Vec<ApiDocumentation>>,
        sources: Option<Vec<Source>>,
        sources_note: Option<String>,
        keywords: Option<Vec<Keyword>>,
        acronyms: Option<Vec<Acronym>>,
        errata: Option<Vec<Erratum>>,
        acknowledgements: Option<Vec<Acknowledgement>>,
        acknowledgement_statement: Option<String>,
        disclaimer: Option<String>,
        notes: Option<Vec<Note>>,
        related_indicators: Option<Vec<RelatedIndicator>>,
        compliance: Option<Vec<Compliance>>,
        framework: Option<Vec<Framework>>,
        series_groups: Option<Vec<SeriesGroup>>,
        contacts: Option<Vec<Contact>>,
    }
}

choice! {
    pub enum NameType {
        Personal => "Personal",
        Organizational => "Organizational",
    }
}

choice! {
    pub enum TitleType {
        AlternativeTitle => "AlternativeTitle",
        Subtitle => "Subtitle",
        TranslatedTitle => "TranslatedTitle",
        Other => "Other",
    }
}

choice! {
    /// DataCite general resource type
    pub enum ResourceTypeGeneral {
        Audiovisual => "Audiovisual",
        Collection => "Collection",
        DataPaper => "DataPaper",
        Dataset => "Dataset",
        Event => "Event",
        Image => "Image",
        InteractiveResource => "InteractiveResource",
        Model => "Model",
        PhysicalObject => "PhysicalObject",
        Service => "Service",
        Software => "Software",
        Sound => "Sound",
        Text => "Text",
        Workflow => "Workflow",
        Other => "Other",
    }
}

entity! {
    pub struct Creator {
        name: String,
        name_type as "nameType": Option<NameType>,
        given_name as "givenName": Option<String>,
        family_name as "familyName": Option<String>,
    }
}

entity! {
    pub struct Title {
        title: String,
        title_type as "titleType": Option<TitleType>,
        lang: Option<String>,
    }
}

entity! {
    pub struct ResourceType {
        resource_type as "resourceType": String,
        resource_type_general as "resourceTypeGeneral": Option<ResourceTypeGeneral>,
    }
}

entity! {
    /// DataCite registration metadata
    pub struct Datacite {
        doi: Option<String>,
        prefix: Option<String>,
        suffix: Option<String>,
        creators: Option<Vec<Creator>>,
        titles: Option<Vec<Title>>,
        publisher: Option<String>,
        publication_year as "publicationYear": Option<String>,
        /// A single object on the wire despite the plural name
        types: Option<ResourceType>,
        url: Option<Uri>,
        language: Option<String>,
    }
}

entity! {
    /// A timeseries (indicator) record
    pub struct TimeseriesMetadata {
        idno: String,
        metadata_information: Option<MetadataInformation>,
        series_description: SeriesDescription,
        datacite: Option<Datacite>,
        provenance: Option<Vec<Provenance>>,
        tags: Option<Vec<Tag>>,
        additional: Option<Additional>,
    }
}
