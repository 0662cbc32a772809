//! Predicates and the backing collection seam
//!
//! The engine never touches storage: it builds [`Predicate`] values and
//! hands them to a [`RecordCollection`], which the data layer implements
//! (for this service, a SQL condition builder over DuckDB).

use super::comparator::ComparisonOperator;
use super::tag::FilterValue;

/// A composable predicate over backing-store fields
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Substring match on one field
    Contains {
        field: &'static str,
        value: String,
        case_sensitive: bool,
    },
    /// Suffix match on one field
    EndsWith {
        field: &'static str,
        value: String,
        case_sensitive: bool,
    },
    /// Relational comparison on one field
    Compare {
        field: &'static str,
        operator: ComparisonOperator,
        value: FilterValue,
    },
    /// OR of the inner predicates (a multi-field tag means "any of these")
    AnyOf(Vec<Predicate>),
}

/// Backing record collection the composed predicate is applied against.
///
/// Implementations must AND successive `filter` calls together and support
/// identity deduplication, since multi-field ORs over a joined store can
/// produce duplicate rows.
pub trait RecordCollection: Sized {
    /// Narrow the collection by one predicate (ANDed with prior filters)
    fn filter(self, predicate: Predicate) -> Self;

    /// Deduplicate the final result by record identity
    fn distinct(self) -> Self;
}

/// Immutable output of the global pass, threaded into local predicate
/// construction. Replaces hidden engine state with an explicit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryContext {
    /// String predicates are case-insensitive unless a `case:true` global
    /// filter flipped this on.
    pub case_sensitive: bool,
}
