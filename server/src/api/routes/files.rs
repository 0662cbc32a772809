//! File search endpoints
//!
//! `GET /api/v1/files?query=...` runs a search query against the file
//! catalog and returns the matching records. The query language is the
//! one implemented in [`crate::domain::search`]; see
//! [`crate::domain::files`] for the filter vocabulary.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use serde::{Deserialize, Serialize};

use super::super::types::ApiError;
use crate::data::duckdb::repositories::files::search_files;
use crate::data::{DuckdbService, FileCollection, FileRecordRow};
use crate::domain::files::FileSearchEngine;
use crate::domain::search::SearchEngine;

#[derive(Clone)]
pub struct FilesApiState {
    pub database: Arc<DuckdbService>,
    /// Vocabulary registries are built once and read-only afterwards
    pub engine: Arc<FileSearchEngine>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    /// Raw search query, e.g. `report size:>=1000 date:<2022-01-01`
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub items: Vec<FileRecordRow>,
    pub count: usize,
}

/// Search the file catalog
pub async fn search(
    State(state): State<FilesApiState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params
        .query
        .ok_or_else(|| ApiError::bad_request("MISSING_QUERY", "query parameter is required"))?;

    let collection = state.engine.search(&query, FileCollection::base())?;

    let database = state.database.clone();
    let items = tokio::task::spawn_blocking(move || {
        let conn = database.conn();
        search_files(&conn, &collection)
    })
    .await
    .map_err(|e| ApiError::internal(format!("Search task failed: {}", e)))?
    .map_err(ApiError::from_duckdb)?;

    let count = items.len();
    Ok(Json(SearchResponse { items, count }))
}

pub fn routes(database: Arc<DuckdbService>) -> axum::Router {
    axum::Router::new()
        .route("/api/v1/files", get(search))
        .with_state(FilesApiState {
            database,
            engine: Arc::new(FileSearchEngine::new()),
        })
}
