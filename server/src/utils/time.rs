//! Time utility functions

use chrono::NaiveDate;

/// Parse a search-query date value (`%Y-%m-%d`)
pub fn parse_search_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_date_valid() {
        let date = parse_search_date("2022-01-31").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_search_date_rejects_other_formats() {
        assert!(parse_search_date("31-01-2022").is_err());
        assert!(parse_search_date("2022/01/31").is_err());
        assert!(parse_search_date("2022-01-31T00:00:00Z").is_err());
    }

    #[test]
    fn test_parse_search_date_rejects_impossible_dates() {
        assert!(parse_search_date("2022-02-30").is_err());
    }
}
