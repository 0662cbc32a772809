//! Database schema definition

/// Current schema version; bump together with a new migration arm
pub const SCHEMA_VERSION: i32 = 1;

/// Initial schema: file records, lab metadata rows, and the link table
/// between them. The search query joins all three, so the link columns are
/// indexed.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL,
    applied_at BIGINT NOT NULL,
    description VARCHAR
);

CREATE TABLE IF NOT EXISTS file_record (
    id BIGINT PRIMARY KEY,
    bucket VARCHAR NOT NULL,
    path VARCHAR NOT NULL,
    size BIGINT NOT NULL,
    last_modified_date DATE NOT NULL,
    etag VARCHAR
);

CREATE TABLE IF NOT EXISTS metadata_row (
    id BIGINT PRIMARY KEY,
    subject_id VARCHAR,
    external_subject_id VARCHAR,
    sample_id VARCHAR,
    source VARCHAR,
    "type" VARCHAR
);

CREATE TABLE IF NOT EXISTS file_metadata (
    file_id BIGINT NOT NULL,
    metadata_id BIGINT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_file_record_path ON file_record (path);
CREATE INDEX IF NOT EXISTS idx_file_metadata_file ON file_metadata (file_id);
CREATE INDEX IF NOT EXISTS idx_file_metadata_metadata ON file_metadata (metadata_id);
"#;
