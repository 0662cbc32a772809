//! Parsed filter instances
//!
//! A [`Filter`] is one resolved query token: a filter type, an optional
//! comparator, and the typed value. The comparator is present exactly when
//! the type's method is COMPARE; a bare default-type token is never
//! comparator-checked, even if its value happens to start with a comparator
//! symbol.

use super::comparator::ComparisonOperator;
use super::error::FilterError;
use super::filter_type::FilterType;
use super::method::FilterMethod;
use super::tag::FilterValue;

/// One parsed query token
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub filter_type: FilterType,
    pub comparator: Option<ComparisonOperator>,
    pub value: FilterValue,
}

impl Filter {
    /// Build a filter from a type and its raw comparator+value fragment.
    ///
    /// For COMPARE-method types the fragment must start with a registered
    /// comparator symbol; for every other method the whole fragment is the
    /// raw value.
    pub fn new(filter_type: FilterType, fragment: &str) -> Result<Self, FilterError> {
        let (comparator, value_raw) = if filter_type.method == FilterMethod::Compare {
            let (op, rest) = ComparisonOperator::resolve(fragment)?;
            (Some(op), rest)
        } else {
            (None, fragment)
        };

        let value = (filter_type.tag.value_parser)(value_raw)?;

        Ok(Self {
            filter_type,
            comparator,
            value,
        })
    }
}
