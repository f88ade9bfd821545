use chrono_tz::Tz;

/// Error types for timezone operations
#[derive(Debug)]
pub enum TimezoneError {
    InvalidTimezone(String),
}

impl std::fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimezoneError::InvalidTimezone(tz) => write!(
                f,
                "Invalid timezone: '{}'. Use an IANA name like Europe/Paris or America/New_York",
                tz
            ),
        }
    }
}

impl std::error::Error for TimezoneError {}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .trim()
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}
