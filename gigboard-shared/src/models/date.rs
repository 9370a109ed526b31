/// Calendar date parsing for order schedules
///
/// Dates arrive as `MM/DD/YYYY` strings, both in fixtures and in request
/// bodies, and are stored and emitted as ISO `YYYY-MM-DD`.

use chrono::NaiveDate;
use thiserror::Error;

/// Input format for order dates
pub const INPUT_FORMAT: &str = "%m/%d/%Y";

/// Date parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The value is not a real `MM/DD/YYYY` calendar date
    #[error("invalid date '{value}': expected MM/DD/YYYY")]
    Invalid { value: String },
}

/// Parses a `MM/DD/YYYY` date
///
/// # Errors
///
/// Returns `DateError::Invalid` for anything that is not a real calendar date
/// in that format, such as `13/40/2024` or `2024-01-05`.
///
/// # Example
///
/// ```
/// use gigboard_shared::models::date::parse_date;
///
/// let date = parse_date("02/08/2013").unwrap();
/// assert_eq!(date.to_string(), "2013-02-08");
/// assert!(parse_date("13/40/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).map_err(|_| DateError::Invalid {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("05/02/2014").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2014, 5, 2).unwrap());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_date("02/29/2024").is_ok());
        assert!(parse_date("02/29/2023").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = parse_date("13/40/2024").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date '13/40/2024': expected MM/DD/YYYY"
        );
    }

    #[test]
    fn test_parse_rejects_iso() {
        assert!(parse_date("2024-01-05").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_serializes_as_iso() {
        let date = parse_date("11/20/2015").unwrap();
        assert_eq!(serde_json::to_value(date).unwrap(), "2015-11-20");
    }
}
