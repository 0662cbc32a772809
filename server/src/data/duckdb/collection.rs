//! SQL-backed record collection for file search
//!
//! Implements the engine's `RecordCollection` seam as a SQL condition
//! builder: every predicate renders to a WHERE fragment with `?`
//! placeholders, bind values collected in insertion order. The final
//! statement selects from `file_record` left-joined to its metadata rows,
//! so multi-field ORs can duplicate file rows and `distinct` matters.

use crate::domain::search::{Predicate, RecordCollection};
use crate::utils::sql::escape_like_pattern;

/// Collects SQL bind values during query building (insertion order)
#[derive(Debug, Default, Clone)]
pub struct SqlParams {
    pub values: Vec<String>,
}

const FILE_SELECT_COLUMNS: &str = "f.id, f.bucket, f.path, f.size, \
     CAST(f.last_modified_date AS VARCHAR) AS last_modified_date, f.etag";

const FILE_FROM_CLAUSE: &str = "FROM file_record f \
     LEFT JOIN file_metadata fm ON fm.file_id = f.id \
     LEFT JOIN metadata_row m ON m.id = fm.metadata_id";

/// Map a logical search field to its qualified column.
/// Unknown fields pass through unchanged.
fn map_field(field: &'static str) -> &'static str {
    match field {
        "path" => "f.path",
        "size" => "f.size",
        "last_modified_date" => "f.last_modified_date",
        "subject_id" => "m.subject_id",
        "external_subject_id" => "m.external_subject_id",
        "sample_id" => "m.sample_id",
        "source" => "m.source",
        "type" => "m.\"type\"",
        other => other,
    }
}

/// Queryable collection of file records
#[derive(Debug, Default, Clone)]
pub struct FileCollection {
    conditions: Vec<String>,
    params: SqlParams,
    distinct: bool,
}

impl FileCollection {
    /// The unfiltered base collection
    pub fn base() -> Self {
        Self::default()
    }

    /// Existence-style rewrite for the `linked` global filter: keep only
    /// file records that do (or do not) have a linked metadata row.
    pub fn with_metadata(mut self, linked: bool) -> Self {
        let condition = if linked {
            "fm.file_id IS NOT NULL"
        } else {
            "fm.file_id IS NULL"
        };
        self.conditions.push(condition.to_string());
        self
    }

    /// Render the full SELECT statement and its bind values
    pub fn select_sql(&self) -> (String, &[String]) {
        let select = if self.distinct {
            "SELECT DISTINCT"
        } else {
            "SELECT"
        };
        let mut sql = format!("{select} {FILE_SELECT_COLUMNS} {FILE_FROM_CLAUSE}");
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        (sql, &self.params.values)
    }

    fn predicate_sql(predicate: &Predicate, params: &mut SqlParams) -> String {
        match predicate {
            Predicate::Contains {
                field,
                value,
                case_sensitive,
            } => {
                let pattern = format!("%{}%", escape_like_pattern(value));
                params.values.push(pattern);
                Self::like_clause(map_field(field), *case_sensitive)
            }
            Predicate::EndsWith {
                field,
                value,
                case_sensitive,
            } => {
                let pattern = format!("%{}", escape_like_pattern(value));
                params.values.push(pattern);
                Self::like_clause(map_field(field), *case_sensitive)
            }
            Predicate::Compare {
                field,
                operator,
                value,
            } => {
                use crate::domain::search::FilterValue;

                let col = map_field(field);
                let op = operator.sql_operator();
                params.values.push(value.as_text());
                // Explicit casts so string bind values compare with the
                // column's native type
                match value {
                    FilterValue::Integer(_) => format!("{col} {op} CAST(? AS BIGINT)"),
                    FilterValue::Date(_) => format!("{col} {op} CAST(? AS DATE)"),
                    FilterValue::Boolean(_) => format!("{col} {op} CAST(? AS BOOLEAN)"),
                    FilterValue::Text(_) => format!("{col} {op} ?"),
                }
            }
            Predicate::AnyOf(inner) => {
                let clauses: Vec<String> = inner
                    .iter()
                    .map(|p| Self::predicate_sql(p, params))
                    .collect();
                format!("({})", clauses.join(" OR "))
            }
        }
    }

    fn like_clause(col: &str, case_sensitive: bool) -> String {
        if case_sensitive {
            format!("{col} LIKE ? ESCAPE '\\'")
        } else {
            format!("{col} ILIKE ? ESCAPE '\\'")
        }
    }
}

impl RecordCollection for FileCollection {
    fn filter(mut self, predicate: Predicate) -> Self {
        let clause = Self::predicate_sql(&predicate, &mut self.params);
        self.conditions.push(clause);
        self
    }

    fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}
