//! Comparison operator vocabulary
//!
//! The five relational symbols a COMPARE-method filter may carry. The symbol
//! set is closed; resolution is greedy so `<=` wins over `<`.

use super::error::FilterError;

/// One supported relational operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 5] = [
        ComparisonOperator::Equal,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::LessThan,
        ComparisonOperator::GreaterOrEqual,
        ComparisonOperator::LessOrEqual,
    ];

    /// Query-string symbol of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }

    /// SQL comparison operator
    pub fn sql_operator(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }

    /// Plain equality (no relational suffix in the original wire format)
    pub fn is_equality(&self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Resolve the operator at the head of a comparator+value fragment.
    ///
    /// Collects every operator whose symbol prefixes the fragment and picks
    /// the longest match, so `<=5` resolves to `<=` rather than `<`.
    /// Returns the operator and the remaining raw value.
    pub fn resolve(fragment: &str) -> Result<(ComparisonOperator, &str), FilterError> {
        let matched = Self::ALL
            .iter()
            .copied()
            .filter(|op| fragment.starts_with(op.symbol()))
            .max_by_key(|op| op.symbol().len())
            .ok_or_else(|| FilterError::InvalidComparisonOperator(fragment.to_string()))?;

        Ok((matched, &fragment[matched.symbol().len()..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_all_symbols() {
        let cases = [
            ("=5", ComparisonOperator::Equal, "5"),
            (">5", ComparisonOperator::GreaterThan, "5"),
            ("<5", ComparisonOperator::LessThan, "5"),
            (">=5", ComparisonOperator::GreaterOrEqual, "5"),
            ("<=5", ComparisonOperator::LessOrEqual, "5"),
        ];
        for (fragment, expected_op, expected_rest) in cases {
            let (op, rest) = ComparisonOperator::resolve(fragment).unwrap();
            assert_eq!(op, expected_op);
            assert_eq!(rest, expected_rest);
        }
    }

    #[test]
    fn resolve_prefers_longest_match() {
        // <= and < both prefix the fragment; the longer symbol must win
        let (op, rest) = ComparisonOperator::resolve("<=5").unwrap();
        assert_eq!(op, ComparisonOperator::LessOrEqual);
        assert_eq!(rest, "5");

        let (op, rest) = ComparisonOperator::resolve(">=2022-01-01").unwrap();
        assert_eq!(op, ComparisonOperator::GreaterOrEqual);
        assert_eq!(rest, "2022-01-01");
    }

    #[test]
    fn resolve_rejects_unknown_operator() {
        let err = ComparisonOperator::resolve("!=1").unwrap_err();
        assert_eq!(err, FilterError::InvalidComparisonOperator("!=1".to_string()));
    }

    #[test]
    fn resolve_rejects_bare_value() {
        assert!(ComparisonOperator::resolve("1000").is_err());
    }
}
