//! SQL utility functions

/// Escape SQL LIKE metacharacters (%, _, \) in user input.
///
/// Search values like `report_v2` or `100%` must match literally, not as
/// LIKE wildcards, so every pattern built from query input goes through
/// this before `%` anchors are added. The produced pattern is used with
/// `ESCAPE '\'`.
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_like_pattern("report.pdf"), "report.pdf");
        assert_eq!(escape_like_pattern(""), "");
    }

    #[test]
    fn underscores_in_file_names_are_escaped() {
        assert_eq!(escape_like_pattern("report_final"), "report\\_final");
    }

    #[test]
    fn percent_and_backslash_are_escaped() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
        assert_eq!(escape_like_pattern("100%_\\x"), "100\\%\\_\\\\x");
    }
}
