//! Filter types
//!
//! A filter type is the user-facing vocabulary word of the query language:
//! the token before the `:` separator. It binds exactly one tag to one
//! method. A registry may carry a single default type, used for bare tokens
//! without a `:`.

use std::collections::HashMap;

use super::method::FilterMethod;
use super::tag::{FilterTag, FilterTagRegistry, TAG_CASE};

/// Wire name of the base case-sensitivity filter type
pub const TYPE_CASE_SENSITIVE: &str = "case";

/// User-facing query vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterType {
    /// Wire token, e.g. `pathinc`
    pub name: &'static str,
    pub tag: FilterTag,
    pub method: FilterMethod,
    pub description: &'static str,
}

impl FilterType {
    pub fn new(
        name: &'static str,
        tag: FilterTag,
        method: FilterMethod,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            tag,
            method,
            description,
        }
    }
}

/// Registry of filter types, populated at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct FilterTypeRegistry {
    types: HashMap<&'static str, FilterType>,
    default: Option<&'static str>,
}

impl FilterTypeRegistry {
    /// New registry pre-populated with the base `case` type.
    ///
    /// The tag registry must already contain the base tags; domain
    /// constructors register their own tags first, then build this.
    pub fn new(tags: &FilterTagRegistry) -> Self {
        let mut registry = Self {
            types: HashMap::new(),
            default: None,
        };
        let case_tag = *tags
            .get(TAG_CASE)
            .expect("base tag registry is missing the CASE tag");
        registry.register(FilterType::new(
            TYPE_CASE_SENSITIVE,
            case_tag,
            FilterMethod::CaseSensitivity,
            "Defines case sensitivity for string comparison. Defaults to false",
        ));
        registry
    }

    pub fn register(&mut self, filter_type: FilterType) {
        self.types.insert(filter_type.name, filter_type);
    }

    /// Mark a registered type as the default for bare tokens.
    /// Ignored if the name is unknown.
    pub fn set_default(&mut self, name: &'static str) {
        if self.types.contains_key(name) {
            self.default = Some(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FilterType> {
        self.types.get(name)
    }

    pub fn get_default(&self) -> Option<&FilterType> {
        self.default.and_then(|name| self.types.get(name))
    }
}
