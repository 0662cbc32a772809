//! File-record search vocabulary
//!
//! Registers the query vocabulary for file search (`pathinc`, `ext`,
//! `size`, `date`, `subjectid`, `sampleid`, `source`, `type`, `linked`) on
//! top of the base engine vocabulary, and implements the record-kind
//! specific `linked` global filter: restrict results to file records that
//! do (or do not) have at least one linked metadata row.

use crate::data::duckdb::FileCollection;
use crate::domain::search::tag::{parse_boolean, parse_date, parse_integer, parse_text};
use crate::domain::search::{
    FilterMethod, FilterTag, FilterTagRegistry, FilterType, FilterTypeRegistry, ParsedQuery,
    QueryContext, SearchEngine, base_query_context,
};

/// Tag names for the file record kind
mod tags {
    pub const PATH: &str = "PATH";
    pub const SIZE: &str = "SIZE";
    pub const LAST_MODIFIED_DATE: &str = "LAST_MODIFIED_DATE";
    pub const SUBJECT_ID: &str = "SUBJECT_ID";
    pub const SAMPLE_ID: &str = "SAMPLE_ID";
    pub const SOURCE: &str = "SOURCE";
    pub const TYPE: &str = "TYPE";
    pub const LINKED: &str = "LINKED";
}

/// Wire name of the `linked` filter type
pub const TYPE_LINKED: &str = "linked";

/// Global method marker for the metadata-existence rewrite
const LINKED_WITH_METADATA: FilterMethod = FilterMethod::Global("LINKED_WITH_METADATA");

fn file_filter_tags() -> FilterTagRegistry {
    let mut registry = FilterTagRegistry::new();
    registry.register(FilterTag::new(tags::PATH, parse_text, &["path"]));
    registry.register(FilterTag::new(tags::SIZE, parse_integer, &["size"]));
    registry.register(FilterTag::new(
        tags::LAST_MODIFIED_DATE,
        parse_date,
        &["last_modified_date"],
    ));
    registry.register(FilterTag::new(
        tags::SUBJECT_ID,
        parse_text,
        &["subject_id", "external_subject_id"],
    ));
    registry.register(FilterTag::new(tags::SAMPLE_ID, parse_text, &["sample_id"]));
    registry.register(FilterTag::new(tags::SOURCE, parse_text, &["source"]));
    registry.register(FilterTag::new(tags::TYPE, parse_text, &["type"]));
    registry.register(FilterTag::new(tags::LINKED, parse_boolean, &[]));
    registry
}

fn file_filter_types(tags_registry: &FilterTagRegistry) -> FilterTypeRegistry {
    let tag = |name: &str| {
        *tags_registry
            .get(name)
            .expect("file tag registry is missing a registered tag")
    };

    let mut registry = FilterTypeRegistry::new(tags_registry);
    registry.register(FilterType::new(
        "pathinc",
        tag(tags::PATH),
        FilterMethod::Contains,
        "File path includes",
    ));
    registry.register(FilterType::new(
        "ext",
        tag(tags::PATH),
        FilterMethod::EndsWith,
        "File extension",
    ));
    registry.register(FilterType::new(
        "size",
        tag(tags::SIZE),
        FilterMethod::Compare,
        "Compare with file size",
    ));
    registry.register(FilterType::new(
        "date",
        tag(tags::LAST_MODIFIED_DATE),
        FilterMethod::Compare,
        "Compare with last modified date of the file",
    ));
    registry.register(FilterType::new(
        "subjectid",
        tag(tags::SUBJECT_ID),
        FilterMethod::Contains,
        "SubjectID/ExternalSubjectID (in metadata) includes",
    ));
    registry.register(FilterType::new(
        "sampleid",
        tag(tags::SAMPLE_ID),
        FilterMethod::Contains,
        "SampleID (in metadata) includes",
    ));
    registry.register(FilterType::new(
        "source",
        tag(tags::SOURCE),
        FilterMethod::Contains,
        "Source (in metadata) includes, e.g. FFPE, tissue, blood",
    ));
    registry.register(FilterType::new(
        "type",
        tag(tags::TYPE),
        FilterMethod::Contains,
        "Type (in metadata) includes, e.g. WGS, WTS",
    ));
    registry.register(FilterType::new(
        TYPE_LINKED,
        tag(tags::LINKED),
        LINKED_WITH_METADATA,
        "The file record is linked with at least one metadata row",
    ));
    registry.set_default("pathinc");
    registry
}

/// Search engine instance for file records.
///
/// Built once at startup; read-only afterwards.
pub struct FileSearchEngine {
    types: FilterTypeRegistry,
}

impl FileSearchEngine {
    pub fn new() -> Self {
        let tags_registry = file_filter_tags();
        Self {
            types: file_filter_types(&tags_registry),
        }
    }
}

impl Default for FileSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for FileSearchEngine {
    type Collection = FileCollection;

    fn filter_types(&self) -> &FilterTypeRegistry {
        &self.types
    }

    fn apply_global_filters(
        &self,
        parsed: &ParsedQuery,
        mut collection: FileCollection,
    ) -> (QueryContext, FileCollection) {
        let context = base_query_context(parsed);

        // Only the first value of a repeated `linked` filter is honored
        if let Some(value) = parsed.first_value(TYPE_LINKED) {
            collection = collection.with_metadata(value.is_true());
        }

        (context, collection)
    }
}
