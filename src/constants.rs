use std::time::Duration;

/// Default path of the birthdays file
pub const DEFAULT_BIRTHDAYS_FILE: &str = "birthdays.json";

/// Default base URL of the date facts service
pub const DEFAULT_FACTS_API_URL: &str = "http://numbersapi.com";

/// How often stored birthdays are checked against today's date
pub const BIRTHDAY_CHECK_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_bot_rs=info";
