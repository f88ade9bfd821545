use crate::models::MonthDay;

/// Validation error types
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingSeparator,
    InvalidMonth(String),
    InvalidDay(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingSeparator => {
                write!(f, "Date must use '/' or '-' between month and day")
            }
            ValidationError::InvalidMonth(month) => {
                write!(f, "Invalid month '{}', expected 1-12", month)
            }
            ValidationError::InvalidDay(day) => write!(f, "Invalid day '{}', expected 1-31", day),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Pure function: Parse a one or two digit number within range
fn parse_component(value: &str, range: std::ops::RangeInclusive<u32>) -> Option<u32> {
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse::<u32>().ok().filter(|v| range.contains(v))
}

/// Parse a birthday typed as `MM/DD` or `MM-DD`
///
/// Months 1-12 and days 1-31 are accepted with an optional leading zero.
/// Days are not checked against the month, so `2/30` is a valid birthday.
pub fn parse_birthday_date(input: &str) -> Result<MonthDay, ValidationError> {
    let input = input.trim();
    let (month_str, day_str) = input
        .split_once(['/', '-'])
        .ok_or(ValidationError::MissingSeparator)?;

    let month = parse_component(month_str, 1..=12)
        .ok_or_else(|| ValidationError::InvalidMonth(month_str.to_string()))?;
    let day = parse_component(day_str, 1..=31)
        .ok_or_else(|| ValidationError::InvalidDay(day_str.to_string()))?;

    Ok(MonthDay::new(month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slash_and_dash() {
        assert_eq!(parse_birthday_date("12/25"), Ok(MonthDay::new(12, 25)));
        assert_eq!(parse_birthday_date("3-15"), Ok(MonthDay::new(3, 15)));
        assert_eq!(parse_birthday_date("3-15").unwrap().to_string(), "3/15");
    }

    #[test]
    fn test_parse_strips_leading_zeros() {
        assert_eq!(parse_birthday_date("03/05").unwrap().to_string(), "3/5");
        assert_eq!(parse_birthday_date("09-09").unwrap().to_string(), "9/9");
    }

    #[test]
    fn test_parse_accepts_days_past_month_end() {
        assert_eq!(parse_birthday_date("2/30"), Ok(MonthDay::new(2, 30)));
        assert_eq!(parse_birthday_date("4/31"), Ok(MonthDay::new(4, 31)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_birthday_date(" 4/1 "), Ok(MonthDay::new(4, 1)));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_birthday_date("13/01"),
            Err(ValidationError::InvalidMonth("13".to_string()))
        );
        assert!(parse_birthday_date("0/10").is_err());
        assert!(parse_birthday_date("00/10").is_err());
        assert_eq!(
            parse_birthday_date("1/32"),
            Err(ValidationError::InvalidDay("32".to_string()))
        );
        assert!(parse_birthday_date("1/0").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(parse_birthday_date("1225"), Err(ValidationError::MissingSeparator));
        assert_eq!(parse_birthday_date(""), Err(ValidationError::MissingSeparator));
        assert!(parse_birthday_date("abc/def").is_err());
        assert!(parse_birthday_date("1/2/3").is_err());
        assert!(parse_birthday_date("12/").is_err());
        assert!(parse_birthday_date("/12").is_err());
        assert!(parse_birthday_date("1.2").is_err());
        assert!(parse_birthday_date("+1/2").is_err());
        assert!(parse_birthday_date("012/1").is_err());
        assert!(parse_birthday_date("1 / 2").is_err());
    }
}
