//! Search query error types
//!
//! Everything here is a client-input error: the handler layer maps these to
//! a 400 response and nothing is ever retried.

use thiserror::Error;

/// Error raised while constructing a single filter from one query token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The leading characters of a COMPARE fragment match no known operator
    #[error("invalid comparison operator in \"{0}\"")]
    InvalidComparisonOperator(String),

    /// The tag's value parser rejected the raw value
    #[error("invalid filter value: {0}")]
    InvalidFilterValue(String),
}

/// Top-level parse failure for a raw search query
///
/// Carries the offending raw query plus a specific cause so the handler can
/// surface a useful message to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid search query \"{query}\": {reason}")]
pub struct InvalidSearchQuery {
    pub query: String,
    pub reason: QueryErrorReason,
}

impl InvalidSearchQuery {
    pub fn new(query: impl Into<String>, reason: QueryErrorReason) -> Self {
        Self {
            query: query.into(),
            reason,
        }
    }
}

/// Specific cause of an [`InvalidSearchQuery`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryErrorReason {
    /// Token contained more than one `:` separator
    #[error("malformed token \"{0}\"")]
    MalformedToken(String),

    /// Token named a filter type that is not registered
    #[error("unknown filter type \"{0}\"")]
    UnknownFilterType(String),

    /// Bare token used but the registry has no default filter type
    #[error("no default filter type configured")]
    NoDefaultFilterType,

    /// Filter construction failed for one token
    #[error(transparent)]
    Filter(#[from] FilterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_search_query_display_includes_query_and_cause() {
        let err = InvalidSearchQuery::new(
            "bogus:1",
            QueryErrorReason::UnknownFilterType("bogus".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "invalid search query \"bogus:1\": unknown filter type \"bogus\""
        );
    }

    #[test]
    fn filter_error_wraps_transparently() {
        let err = InvalidSearchQuery::new(
            "size:!=1",
            QueryErrorReason::Filter(FilterError::InvalidComparisonOperator("!=1".to_string())),
        );
        assert_eq!(
            err.to_string(),
            "invalid search query \"size:!=1\": invalid comparison operator in \"!=1\""
        );
    }
}
