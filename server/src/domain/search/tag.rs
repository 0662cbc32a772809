//! Filter tags
//!
//! A tag carries the value semantics shared by one or more filter types: how
//! the raw value string is parsed and which backing-store fields the parsed
//! value may be compared against. One tag can span several fields; the
//! engine ORs those together at application time.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::error::FilterError;
use crate::utils::time::parse_search_date;

/// Typed value produced by a tag's parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Boolean(bool),
}

impl FilterValue {
    /// Render the value for a string predicate (substring/suffix match)
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Boolean(b) => b.to_string(),
        }
    }

    /// True for `Boolean(true)`, false for everything else
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }
}

/// Parser from the raw token value to a typed [`FilterValue`]
pub type ValueParser = fn(&str) -> Result<FilterValue, FilterError>;

/// Parse the value as a literal string; never fails
pub fn parse_text(raw: &str) -> Result<FilterValue, FilterError> {
    Ok(FilterValue::Text(raw.to_string()))
}

/// Parse the value as a signed integer
pub fn parse_integer(raw: &str) -> Result<FilterValue, FilterError> {
    raw.parse::<i64>()
        .map(FilterValue::Integer)
        .map_err(|_| FilterError::InvalidFilterValue(raw.to_string()))
}

/// Parse the value as a `%Y-%m-%d` date
pub fn parse_date(raw: &str) -> Result<FilterValue, FilterError> {
    parse_search_date(raw)
        .map(FilterValue::Date)
        .map_err(|_| FilterError::InvalidFilterValue(raw.to_string()))
}

/// Boolean-ish parsing: case-insensitive `"true"` is true, anything else is
/// false. Never fails, matching the lenient behavior of `case:`/`linked:`.
pub fn parse_boolean(raw: &str) -> Result<FilterValue, FilterError> {
    Ok(FilterValue::Boolean(raw.eq_ignore_ascii_case("true")))
}

/// Value semantics plus target backing-store fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterTag {
    pub name: &'static str,
    pub value_parser: ValueParser,
    /// Logical field names the tag compares against, ORed together.
    /// Empty for tags only used by global methods.
    pub field_names: &'static [&'static str],
}

impl FilterTag {
    pub fn new(
        name: &'static str,
        value_parser: ValueParser,
        field_names: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            value_parser,
            field_names,
        }
    }
}

/// Name of the base case-sensitivity tag
pub const TAG_CASE: &str = "CASE";

/// Registry of filter tags, populated at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct FilterTagRegistry {
    tags: HashMap<&'static str, FilterTag>,
}

impl FilterTagRegistry {
    /// New registry pre-populated with the base `CASE` tag
    pub fn new() -> Self {
        let mut registry = Self {
            tags: HashMap::new(),
        };
        registry.register(FilterTag::new(TAG_CASE, parse_boolean, &[]));
        registry
    }

    pub fn register(&mut self, tag: FilterTag) {
        self.tags.insert(tag.name, tag);
    }

    pub fn get(&self, name: &str) -> Option<&FilterTag> {
        self.tags.get(name)
    }
}

impl Default for FilterTagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_registry_has_case_tag() {
        let registry = FilterTagRegistry::new();
        let tag = registry.get(TAG_CASE).unwrap();
        assert!(tag.field_names.is_empty());
        assert_eq!((tag.value_parser)("TRUE").unwrap(), FilterValue::Boolean(true));
        assert_eq!((tag.value_parser)("nope").unwrap(), FilterValue::Boolean(false));
    }

    #[test]
    fn unknown_tag_is_absent() {
        let registry = FilterTagRegistry::new();
        assert!(registry.get("NOPE").is_none());
    }

    #[test]
    fn parse_integer_accepts_digits_only() {
        assert_eq!(parse_integer("1000").unwrap(), FilterValue::Integer(1000));
        assert_eq!(
            parse_integer("12MB").unwrap_err(),
            FilterError::InvalidFilterValue("12MB".to_string())
        );
    }

    #[test]
    fn parse_date_requires_iso_day() {
        assert_eq!(
            parse_date("2022-01-31").unwrap(),
            FilterValue::Date(NaiveDate::from_ymd_opt(2022, 1, 31).unwrap())
        );
        assert!(parse_date("31/01/2022").is_err());
        assert!(parse_date("2022-13-01").is_err());
    }

    #[test]
    fn text_rendering_of_values() {
        assert_eq!(FilterValue::Text("abc".into()).as_text(), "abc");
        assert_eq!(FilterValue::Integer(42).as_text(), "42");
        assert_eq!(
            FilterValue::Date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()).as_text(),
            "2022-01-01"
        );
    }
}
