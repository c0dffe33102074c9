//! Survey microdata record schema, after the DDI codebook layout
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use super::common::{
    AuthoringEntity, BboxItem, Contact, Keyword, Producer, Provenance, Tag, VersionStatement,
};
use crate::validation::{Additional, Uri};

choice! {
    /// Access policy under which the study is published
    pub enum AccessPolicy {
        Direct => "direct",
        Open => "open",
        Public => "public",
        Licensed => "licensed",
        DataEnclave => "data_enclave",
        DataNa => "data_na",
        NoAccess => "no_access",
    }
}

choice! {
    /// Whether an existing study with the same idno is replaced
    pub enum Overwrite {
        Yes => "yes",
        No => "no",
    }
}

choice! {
    pub enum VarInterval {
        Discrete => "discrete",
        Contin => "contin",
    }
}

choice! {
    pub enum VarFormatType {
        Numeric => "numeric",
        Character => "character",
    }
}

choice! {
    pub enum GroupType {
        Subject => "subject",
        Section => "section",
        MultiResp => "multiResp",
        Grid => "grid",
        Display => "display",
        Repetition => "repetition",
        Version => "version",
        Iteration => "iteration",
        Analysis => "analysis",
        Pragmatic => "pragmatic",
        Record => "record",
        File => "file",
        Randomized => "randomized",
        Other => "other",
    }
}

entity! {
    /// Description of the metadata document itself
    pub struct DocDescription {
        title: Option<String>,
        idno: Option<String>,
        producers: Option<Vec<Producer>>,
        prod_date: Option<String>,
        version_statement: Option<VersionStatement>,
    }
}

entity! {
    pub struct StudyIdentifier {
        r#type as "type": Option<String>,
        identifier: String,
    }
}

entity! {
    pub struct TitleStatement {
        idno: String,
        identifiers: Option<Vec<StudyIdentifier>>,
        title: String,
        sub_title: Option<String>,
        alternate_title: Option<String>,
        translated_title: Option<String>,
    }
}

entity! {
    pub struct FundingAgency {
        name: Option<String>,
        abbr: Option<String>,
        role: Option<String>,
        grant: Option<String>,
    }
}

entity! {
    pub struct ProductionStatement {
        producers: Option<Vec<Producer>>,
        copyright: Option<String>,
        prod_date: Option<String>,
        prod_place: Option<String>,
        funding_agencies: Option<Vec<FundingAgency>>,
    }
}

entity! {
    pub struct Distributor {
        name: String,
        abbr: Option<String>,
        affiliation: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct Depositor {
        name: Option<String>,
        abbr: Option<String>,
        affiliation: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct DistributionStatement {
        distributors: Option<Vec<Distributor>>,
        contact: Option<Vec<Contact>>,
        depositor: Option<Vec<Depositor>>,
        deposit_date: Option<String>,
        distribution_date: Option<String>,
    }
}

entity! {
    pub struct SeriesStatement {
        series_name: Option<String>,
        series_info: Option<String>,
    }
}

entity! {
    /// Location of a physical or electronic copy of the study
    pub struct Holding {
        name: Option<String>,
        location: Option<String>,
        callno: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct AuthorizingAgency {
        name: String,
        affiliation: Option<String>,
        abbr: Option<String>,
    }
}

entity! {
    pub struct StudyAuthorization {
        date: Option<String>,
        agency: Option<Vec<AuthorizingAgency>>,
        authorization_statement: Option<String>,
    }
}

entity! {
    pub struct Topic {
        topic: String,
        vocab: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct StudyTimePeriod {
        start: Option<String>,
        end: Option<String>,
        cycle: Option<String>,
    }
}

entity! {
    pub struct CollectionDate {
        start: Option<String>,
        end: Option<String>,
        cycle: Option<String>,
    }
}

entity! {
    pub struct Nation {
        name: String,
        abbreviation: Option<String>,
    }
}

entity! {
    pub struct BoundPolygon {
        lat: Option<String>,
        lon: Option<String>,
    }
}

entity! {
    /// Scope and coverage of the study
    pub struct StudyInfo {
        study_budget: Option<String>,
        keywords: Option<Vec<Keyword>>,
        topics: Option<Vec<Topic>>,
        r#abstract as "abstract": Option<String>,
        time_periods: Option<Vec<StudyTimePeriod>>,
        coll_dates: Option<Vec<CollectionDate>>,
        nation: Option<Vec<Nation>>,
        bbox: Option<Vec<BboxItem>>,
        bound_poly: Option<Vec<BoundPolygon>>,
        geog_coverage: Option<String>,
        geog_coverage_notes: Option<String>,
        geog_unit: Option<String>,
        analysis_unit: Option<String>,
        universe: Option<String>,
        data_kind: Option<String>,
        notes: Option<String>,
    }
}

entity! {
    pub struct DataCollector {
        name: Option<String>,
        abbr: Option<String>,
        affiliation: Option<String>,
        role: Option<String>,
    }
}

entity! {
    pub struct MethodDataCollection {
        time_method: Option<String>,
        data_collectors: Option<Vec<DataCollector>>,
        sampling_procedure: Option<String>,
        sampling_deviation: Option<String>,
        coll_mode: Option<Vec<String>>,
        research_instrument: Option<String>,
        instru_development: Option<String>,
        coll_situation: Option<String>,
        act_min: Option<String>,
        weight: Option<String>,
        cleaning_operations: Option<String>,
    }
}

entity! {
    pub struct AnalysisInfo {
        response_rate: Option<String>,
        sampling_error_estimates: Option<String>,
        data_appraisal: Option<String>,
    }
}

entity! {
    pub struct DataProcessing {
        r#type as "type": Option<String>,
        description: Option<String>,
    }
}

entity! {
    /// How the data were collected and processed
    pub struct Method {
        data_collection: Option<MethodDataCollection>,
        method_notes: Option<String>,
        analysis_info: Option<AnalysisInfo>,
        study_class: Option<String>,
        data_processing: Option<Vec<DataProcessing>>,
    }
}

entity! {
    pub struct DatasetAvailability {
        access_place: Option<String>,
        access_place_url: Option<Uri>,
        original_archive: Option<String>,
        status: Option<String>,
        coll_size: Option<String>,
        complete: Option<String>,
        file_quantity: Option<String>,
        notes: Option<String>,
    }
}

entity! {
    pub struct ConfidentialityDeclaration {
        txt: Option<String>,
        required: Option<String>,
        form_url: Option<Uri>,
        form_id: Option<String>,
    }
}

entity! {
    pub struct AccessAuthority {
        name: Option<String>,
        affiliation: Option<String>,
        email: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct DatasetUse {
        conf_dec: Option<Vec<ConfidentialityDeclaration>>,
        access_authority: Option<Vec<AccessAuthority>>,
        conditions: Option<String>,
        cit_req: Option<String>,
        disclaimer: Option<String>,
        contact: Option<Vec<Contact>>,
    }
}

entity! {
    pub struct DataAccess {
        dataset_availability: Option<DatasetAvailability>,
        dataset_use: Option<DatasetUse>,
        notes: Option<String>,
    }
}

entity! {
    /// Study-level description of a survey
    pub struct StudyDescription {
        title_statement: TitleStatement,
        authoring_entity: Option<Vec<AuthoringEntity>>,
        production_statement: Option<ProductionStatement>,
        distribution_statement: Option<DistributionStatement>,
        series_statement: Option<SeriesStatement>,
        version_statement: Option<VersionStatement>,
        bib_citation: Option<String>,
        bib_citation_format: Option<String>,
        holdings: Option<Vec<Holding>>,
        study_notes: Option<String>,
        study_authorization: Option<StudyAuthorization>,
        study_info: Option<StudyInfo>,
        method: Option<Method>,
        data_access: Option<DataAccess>,
    }
}

entity! {
    /// A data file of the study
    pub struct DataFile {
        file_id: String,
        file_name: String,
        file_type: Option<String>,
        description: Option<String>,
        case_count: Option<i64>,
        var_count: Option<i64>,
        producer: Option<String>,
        data_checks: Option<String>,
        missing_data: Option<String>,
        version: Option<String>,
        notes: Option<String>,
    }
}

entity! {
    pub struct SummaryStatistic {
        r#type as "type": Option<String>,
        value: Option<f64>,
        wgtd: Option<String>,
    }
}

entity! {
    pub struct CategoryStatistic {
        r#type as "type": Option<String>,
        value: Option<f64>,
        wgtd: Option<String>,
    }
}

entity! {
    /// A value label of a categorical variable
    pub struct Category {
        value: Option<String>,
        labl: Option<String>,
        is_missing: Option<String>,
        stats: Option<Vec<CategoryStatistic>>,
    }
}

entity! {
    pub struct VariableConcept {
        title: Option<String>,
        vocab: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct VarFormat {
        r#type as "type": Option<VarFormatType>,
        name: Option<String>,
        note: Option<String>,
    }
}

entity! {
    /// A variable of a data file
    pub struct Variable {
        file_id: String,
        vid: String,
        name: String,
        labl: String,
        var_intrvl: Option<VarInterval>,
        var_dcml: Option<String>,
        var_wgt: Option<i64>,
        loc_start_pos: Option<i64>,
        loc_end_pos: Option<i64>,
        loc_width: Option<i64>,
        loc_rec_seg_no: Option<i64>,
        var_imputation: Option<String>,
        var_derivation: Option<String>,
        var_security: Option<String>,
        var_respunit: Option<String>,
        var_qstn_preqtxt: Option<String>,
        var_qstn_qstnlit: Option<String>,
        var_qstn_postqtxt: Option<String>,
        var_qstn_ivulnstr: Option<String>,
        var_universe: Option<String>,
        var_sumstat: Option<Vec<SummaryStatistic>>,
        var_txt: Option<String>,
        var_catgry: Option<Vec<Category>>,
        var_codinstr: Option<String>,
        var_concept: Option<Vec<VariableConcept>>,
        var_format: Option<VarFormat>,
        var_notes: Option<String>,
    }
}

entity! {
    /// Group of variables; member ids are space separated
    pub struct VariableGroup {
        vgid: String,
        variables: Option<String>,
        variable_groups: Option<String>,
        group_type: Option<GroupType>,
        label: Option<String>,
        universe: Option<String>,
        notes: Option<String>,
        txt: Option<String>,
        definition: Option<String>,
    }
}

entity! {
    pub struct LdaModelInfo {
        source: Option<String>,
        author: Option<String>,
        version: Option<String>,
        model_id: Option<String>,
        nb_topics: Option<i64>,
        description: Option<String>,
        corpus: Option<String>,
        uri: Option<Uri>,
    }
}

entity! {
    pub struct TopicWord {
        word: Option<String>,
        word_weight: Option<f64>,
    }
}

entity! {
    pub struct LdaTopicDescription {
        topic_id: Option<i64>,
        topic_score: Option<f64>,
        topic_label: Option<String>,
        topic_words: Option<Vec<TopicWord>>,
    }
}

entity! {
    /// Topic model scores of the study documentation
    pub struct LdaTopic {
        model_info: Option<Vec<LdaModelInfo>>,
        topic_description: Option<Vec<LdaTopicDescription>>,
    }
}

entity! {
    /// Word embedding of the study documentation
    pub struct Embedding {
        id: String,
        description: Option<String>,
        date: Option<String>,
        vector: Vec<f64>,
    }
}

entity! {
    /// A survey microdata record
    pub struct MicrodataMetadata {
        repositoryid: Option<String>,
        access_policy: Option<AccessPolicy>,
        published: Option<i64>,
        overwrite: Option<Overwrite>,
        doc_desc: Option<DocDescription>,
        study_desc: StudyDescription,
        data_files: Option<Vec<DataFile>>,
        variables: Option<Vec<Variable>>,
        variable_groups: Option<Vec<VariableGroup>>,
        provenance: Option<Vec<Provenance>>,
        tags: Option<Vec<Tag>>,
        lda_topics: Option<Vec<LdaTopic>>,
        embeddings: Option<Vec<Embedding>>,
        additional: Option<Additional>,
    }
}
