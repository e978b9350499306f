use chrono::NaiveDate;

use unibuddy_domain::shared::DomainError;

/// Parse a `YYYY-MM-DD` day string at the application boundary. The domain
/// calculator only ever sees already-valid dates.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::Validation(format!("Invalid date '{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("2025-07-16").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 16).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date(" 2025-07-16 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_date("16/07/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
