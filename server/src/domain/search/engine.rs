//! Query engine orchestration
//!
//! Two-pass application of a parsed query, in order: the global pass
//! produces a [`QueryContext`] and may rewrite the base collection; the
//! local pass turns every remaining filter into field predicates (fields of
//! one tag ORed, filters ANDed) and deduplicates the result.
//!
//! Record kinds implement [`SearchEngine`] to plug in their vocabulary and,
//! if needed, override the global pass for record-kind-specific rewrites.

use super::comparator::ComparisonOperator;
use super::error::InvalidSearchQuery;
use super::filter::Filter;
use super::filter_type::{FilterTypeRegistry, TYPE_CASE_SENSITIVE};
use super::method::FilterMethod;
use super::parser::{ParsedQuery, parse_raw_query};
use super::predicate::{Predicate, QueryContext, RecordCollection};

/// Search engine for one record kind
pub trait SearchEngine {
    type Collection: RecordCollection;

    /// The vocabulary this engine parses against
    fn filter_types(&self) -> &FilterTypeRegistry;

    /// Global pass: derive the query context and optionally rewrite the
    /// base collection. The default handles only the `case` toggle;
    /// implementations with record-kind-specific global filters should
    /// call [`base_query_context`] and layer their own rewrites on top.
    fn apply_global_filters(
        &self,
        parsed: &ParsedQuery,
        collection: Self::Collection,
    ) -> (QueryContext, Self::Collection) {
        (base_query_context(parsed), collection)
    }

    /// Parse a raw query and apply it to the base collection.
    fn search(
        &self,
        query_raw: &str,
        base: Self::Collection,
    ) -> Result<Self::Collection, InvalidSearchQuery> {
        let parsed = parse_raw_query(self.filter_types(), query_raw)?;
        let (context, collection) = self.apply_global_filters(&parsed, base);
        Ok(apply_local_filters(&parsed, context, collection))
    }
}

/// Context from the base global vocabulary: the case-sensitivity toggle.
/// Only the first value of a repeated `case` filter is honored.
pub fn base_query_context(parsed: &ParsedQuery) -> QueryContext {
    let case_sensitive = parsed
        .first_value(TYPE_CASE_SENSITIVE)
        .is_some_and(|v| v.is_true());
    QueryContext { case_sensitive }
}

/// Local pass: AND every non-global filter into the collection and
/// deduplicate. Each filter contributes one predicate per tag field,
/// combined with OR.
pub fn apply_local_filters<C: RecordCollection>(
    parsed: &ParsedQuery,
    context: QueryContext,
    mut collection: C,
) -> C {
    for group in parsed.groups() {
        for filter in &group.filters {
            if filter.filter_type.method.is_global() {
                continue;
            }

            let mut field_predicates: Vec<Predicate> = filter
                .filter_type
                .tag
                .field_names
                .iter()
                .filter_map(|field| field_predicate(filter, field, context))
                .collect();

            let predicate = match field_predicates.len() {
                0 => continue,
                1 => field_predicates.remove(0),
                _ => Predicate::AnyOf(field_predicates),
            };
            collection = collection.filter(predicate);
        }
    }

    collection.distinct()
}

fn field_predicate(
    filter: &Filter,
    field: &'static str,
    context: QueryContext,
) -> Option<Predicate> {
    match filter.filter_type.method {
        FilterMethod::Contains => Some(Predicate::Contains {
            field,
            value: filter.value.as_text(),
            case_sensitive: context.case_sensitive,
        }),
        FilterMethod::EndsWith => Some(Predicate::EndsWith {
            field,
            value: filter.value.as_text(),
            case_sensitive: context.case_sensitive,
        }),
        FilterMethod::Compare => Some(Predicate::Compare {
            field,
            operator: filter.comparator.unwrap_or(ComparisonOperator::Equal),
            value: filter.value.clone(),
        }),
        FilterMethod::CaseSensitivity | FilterMethod::Global(_) => None,
    }
}
