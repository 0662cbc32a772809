//! Generic search-query engine
//!
//! A small extensible query language for multi-field, multi-operator search
//! predicates expressed as a single text string, e.g.
//! `pathinc:report size:>=1000 date:<2022-01-01 case:true`.
//!
//! Layering, leaf to root: comparison operators, filter methods (closed
//! enum), filter tags (value parsing + target fields, runtime registry),
//! filter types (wire vocabulary, runtime registry with one optional
//! default), per-token [`Filter`] construction, and the two-pass
//! [`SearchEngine`] that composes predicates against a [`RecordCollection`].
//!
//! Registries are built once at startup and never mutated afterwards, so
//! they are safe to share across request handlers without locking.

mod comparator;
mod engine;
mod error;
mod filter;
mod filter_type;
mod method;
mod parser;
mod predicate;
pub mod tag;

pub use comparator::ComparisonOperator;
pub use engine::{SearchEngine, apply_local_filters, base_query_context};
pub use error::{FilterError, InvalidSearchQuery, QueryErrorReason};
pub use filter::Filter;
pub use filter_type::{FilterType, FilterTypeRegistry, TYPE_CASE_SENSITIVE};
pub use method::FilterMethod;
pub use parser::{FilterGroup, ParsedQuery, parse_raw_query};
pub use predicate::{Predicate, QueryContext, RecordCollection};
pub use tag::{FilterTag, FilterTagRegistry, FilterValue};
