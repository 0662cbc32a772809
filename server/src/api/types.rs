//! Shared API types
//!
//! Error handling common to all API endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::search::InvalidSearchQuery;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_duckdb(e: crate::data::DuckdbError) -> Self {
        tracing::error!(error = %e, "DuckDB error");
        Self::Internal {
            message: "Database operation failed".to_string(),
        }
    }
}

/// Malformed search queries are client errors
impl From<InvalidSearchQuery> for ApiError {
    fn from(e: InvalidSearchQuery) -> Self {
        Self::bad_request("INVALID_SEARCH_QUERY", e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::QueryErrorReason;

    #[test]
    fn invalid_search_query_maps_to_bad_request() {
        let err: ApiError = InvalidSearchQuery::new(
            "bogus:1",
            QueryErrorReason::UnknownFilterType("bogus".to_string()),
        )
        .into();
        match err {
            ApiError::BadRequest { code, message } => {
                assert_eq!(code, "INVALID_SEARCH_QUERY");
                assert!(message.contains("bogus"));
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
