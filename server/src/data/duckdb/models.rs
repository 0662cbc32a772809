//! DuckDB row models

use serde::Serialize;

/// One file record as returned by the search query
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileRecordRow {
    pub id: i64,
    pub bucket: String,
    pub path: String,
    pub size: i64,
    /// `%Y-%m-%d` date string
    pub last_modified_date: String,
    pub etag: Option<String>,
}
