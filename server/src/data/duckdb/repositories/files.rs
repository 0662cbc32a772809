//! File search repository
//!
//! Executes a rendered [`FileCollection`] against the database and maps the
//! result rows.

use duckdb::{Connection, Row};

use super::super::collection::FileCollection;
use super::super::error::DuckdbError;
use super::super::models::FileRecordRow;

/// Run the search SELECT for a composed collection
pub fn search_files(
    conn: &Connection,
    collection: &FileCollection,
) -> Result<Vec<FileRecordRow>, DuckdbError> {
    let (sql, bind_values) = collection.select_sql();
    tracing::debug!(sql = %sql, params = bind_values.len(), "Executing file search");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn duckdb::ToSql> = bind_values
        .iter()
        .map(|v| v as &dyn duckdb::ToSql)
        .collect();

    let mut query_rows = stmt.query(params.as_slice())?;
    let mut rows = vec![];
    while let Some(row) = query_rows.next()? {
        rows.push(row_to_file_record(row)?);
    }
    Ok(rows)
}

fn row_to_file_record(row: &Row<'_>) -> Result<FileRecordRow, duckdb::Error> {
    Ok(FileRecordRow {
        id: row.get(0)?,
        bucket: row.get(1)?,
        path: row.get(2)?,
        size: row.get(3)?,
        last_modified_date: row.get(4)?,
        etag: row.get(5)?,
    })
}


/// End-to-end coverage: raw query through the engine, rendered to SQL,
/// executed against a seeded in-memory database.
#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::data::duckdb::DuckdbService;
    use crate::domain::files::FileSearchEngine;
    use crate::domain::search::SearchEngine;

    /// Three files:
    /// - 1: report, 2 KB, 2021, metadata for SBJ00001 (WGS, FFPE)
    /// - 2: BAM, 4 KB, 2022, two metadata rows, both with external
    ///      subject EXT777
    /// - 3: orphan text file, 100 B, 2020, no metadata
    fn seeded_service() -> DuckdbService {
        let service = DuckdbService::open_in_memory().unwrap();
        {
            let conn = service.conn();
            conn.execute_batch(
                "INSERT INTO file_record VALUES
                     (1, 'primary-data', 'runs/2021/Report_final.pdf', 2048, DATE '2021-06-01', 'aa11'),
                     (2, 'primary-data', 'runs/2022/sample.bam', 4096, DATE '2022-03-15', 'bb22'),
                     (3, 'scratch', 'tmp/notes.txt', 100, DATE '2020-01-01', NULL);
                 INSERT INTO metadata_row VALUES
                     (10, 'SBJ00001', NULL, 'SMP001', 'FFPE', 'WGS'),
                     (11, 'SBJ00002', 'EXT777', 'SMP002', 'blood', 'WTS'),
                     (12, 'SBJ00003', 'EXT777', 'SMP003', 'FFPE', 'WTS');
                 INSERT INTO file_metadata VALUES
                     (1, 10),
                     (2, 11),
                     (2, 12);",
            )
            .unwrap();
        }
        service
    }

    fn ids_for(service: &DuckdbService, query: &str) -> Vec<i64> {
        let engine = FileSearchEngine::new();
        let collection = engine.search(query, FileCollection::base()).unwrap();
        let mut rows = search_files(&service.conn(), &collection).unwrap();
        rows.sort_by_key(|r| r.id);
        rows.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, ""), [1, 2, 3]);
    }

    #[test]
    fn bare_token_searches_path_case_insensitively() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "report"), [1]);
        assert_eq!(ids_for(&service, "runs"), [1, 2]);
    }

    #[test]
    fn case_global_makes_path_match_exact() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "case:true report"), Vec::<i64>::new());
        assert_eq!(ids_for(&service, "case:true Report"), [1]);
    }

    #[test]
    fn extension_filter_matches_suffix_only() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "ext:.bam"), [2]);
        assert_eq!(ids_for(&service, "ext:.pdf"), [1]);
    }

    #[test]
    fn size_comparators_narrow_results() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "size:>=1000"), [1, 2]);
        assert_eq!(ids_for(&service, "size:<1000"), [3]);
        assert_eq!(ids_for(&service, "size:>1000 size:<=2048"), [1]);
        assert_eq!(ids_for(&service, "size:=100"), [3]);
    }

    #[test]
    fn date_comparators_use_iso_dates() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "date:<2022-01-01"), [1, 3]);
        assert_eq!(ids_for(&service, "date:>=2021-06-01"), [1, 2]);
    }

    #[test]
    fn subjectid_matches_either_subject_field() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "subjectid:SBJ0000"), [1, 2]);
        // EXT777 only exists in external_subject_id
        assert_eq!(ids_for(&service, "subjectid:EXT777"), [2]);
    }

    #[test]
    fn metadata_filters_exclude_orphan_files() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "type:WGS"), [1]);
        assert_eq!(ids_for(&service, "source:blood"), [2]);
        assert_eq!(ids_for(&service, "sampleid:SMP"), [1, 2]);
    }

    #[test]
    fn linked_global_splits_on_metadata_existence() {
        let service = seeded_service();
        assert_eq!(ids_for(&service, "linked:true"), [1, 2]);
        assert_eq!(ids_for(&service, "linked:false"), [3]);
    }

    #[test]
    fn combined_query_intersects_all_filters() {
        let service = seeded_service();
        assert_eq!(
            ids_for(&service, "runs size:>=1000 date:<2022-01-01 linked:true"),
            [1]
        );
    }

    #[test]
    fn multi_field_or_does_not_duplicate_rows() {
        let service = seeded_service();
        // File 2 joins two metadata rows that both match EXT777; the
        // final dedup must collapse them to a single result.
        assert_eq!(ids_for(&service, "subjectid:7"), [2]);
    }

    #[test]
    fn invalid_queries_error_before_touching_the_database() {
        let engine = FileSearchEngine::new();
        assert!(engine.search("bogus:1", FileCollection::base()).is_err());
        assert!(engine.search("size:!=1", FileCollection::base()).is_err());
        assert!(engine.search("a:b:c", FileCollection::base()).is_err());
        assert!(
            engine
                .search("date:2022-13-01", FileCollection::base())
                .is_err()
        );
    }
}
