//! Raw query tokenizer and parser
//!
//! Turns a raw space-delimited query string into a [`ParsedQuery`]. Parsing
//! is strict and all-or-nothing: the first invalid token fails the whole
//! query before any predicate is applied.

use super::error::{InvalidSearchQuery, QueryErrorReason};
use super::filter::Filter;
use super::filter_type::FilterTypeRegistry;
use super::tag::FilterValue;

/// Filters parsed for one filter type, in token arrival order
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroup {
    pub type_name: &'static str,
    pub filters: Vec<Filter>,
}

/// Result of parsing a raw query string
///
/// Groups are keyed by filter type name and kept in first-appearance order;
/// multiple tokens of the same type accumulate within one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    groups: Vec<FilterGroup>,
}

impl ParsedQuery {
    fn push(&mut self, filter: Filter) {
        let type_name = filter.filter_type.name;
        match self.groups.iter_mut().find(|g| g.type_name == type_name) {
            Some(group) => group.filters.push(filter),
            None => self.groups.push(FilterGroup {
                type_name,
                filters: vec![filter],
            }),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&FilterGroup> {
        self.groups.iter().find(|g| g.type_name == type_name)
    }

    /// First parsed value for a filter type, if any.
    ///
    /// Global filters honor only the first value when a type is repeated.
    pub fn first_value(&self, type_name: &str) -> Option<&FilterValue> {
        self.get(type_name)
            .and_then(|g| g.filters.first())
            .map(|f| &f.value)
    }

    pub fn groups(&self) -> impl Iterator<Item = &FilterGroup> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Parse a raw query string against a filter type registry.
///
/// Tokenization: trim, split on single spaces, skip empty tokens. Each token
/// is either `type:fragment` or a bare fragment for the registry default
/// type. A token with more than one `:` is malformed.
pub fn parse_raw_query(
    types: &FilterTypeRegistry,
    query_raw: &str,
) -> Result<ParsedQuery, InvalidSearchQuery> {
    let mut parsed = ParsedQuery::default();

    for token in query_raw.trim().split(' ') {
        if token.is_empty() {
            continue;
        }

        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() > 2 {
            return Err(InvalidSearchQuery::new(
                query_raw,
                QueryErrorReason::MalformedToken(token.to_string()),
            ));
        }

        let (filter_type, fragment) = if parts.len() == 1 {
            let default_type = types.get_default().ok_or_else(|| {
                InvalidSearchQuery::new(query_raw, QueryErrorReason::NoDefaultFilterType)
            })?;
            (default_type, parts[0])
        } else {
            let filter_type = types.get(parts[0]).ok_or_else(|| {
                InvalidSearchQuery::new(
                    query_raw,
                    QueryErrorReason::UnknownFilterType(parts[0].to_string()),
                )
            })?;
            (filter_type, parts[1])
        };

        let filter = Filter::new(*filter_type, fragment)
            .map_err(|e| InvalidSearchQuery::new(query_raw, QueryErrorReason::Filter(e)))?;
        parsed.push(filter);
    }

    Ok(parsed)
}
