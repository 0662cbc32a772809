//! Filter methods
//!
//! A filter method is the predicate-construction strategy bound to a filter
//! type. The base vocabulary is closed and compile-time checked; domain
//! extensions hook in through the named `Global` variant, which the domain
//! engine dispatches on during its global pass.

/// Predicate-construction strategy for a filter type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMethod {
    /// Substring match against the tag's fields
    Contains,
    /// Suffix match against the tag's fields
    EndsWith,
    /// Relational comparison using an explicit comparator
    Compare,
    /// Global: toggles case sensitivity for string predicates in the query
    CaseSensitivity,
    /// Global: domain-defined collection rewrite, dispatched by name
    Global(&'static str),
}

impl FilterMethod {
    /// Global methods change how other filters are interpreted (or rewrite
    /// the base collection) instead of producing a field predicate.
    pub fn is_global(&self) -> bool {
        matches!(self, Self::CaseSensitivity | Self::Global(_))
    }
}
