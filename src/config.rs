use chrono_tz::Tz;
use poise::serenity_prelude::GuildId;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BIRTHDAYS_FILE, DEFAULT_FACTS_API_URL};
use crate::utils::timezone::{TimezoneError, parse_timezone};

/// Errors in the environment configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token"
    )]
    MissingToken,
    #[error("BIRTHDAY_TIMEZONE is invalid: {0}")]
    InvalidTimezone(#[from] TimezoneError),
    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

/// Configuration loaded from environment variables
pub struct Config {
    pub discord_token: String,
    pub birthdays_file: PathBuf,
    pub facts_api_url: String,
    pub timezone: Option<Tz>,
    pub notify_once_per_day: bool,
    pub dev_guild_id: Option<GuildId>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = var("DISCORD_TOKEN").ok_or(ConfigError::MissingToken)?;

        let birthdays_file = var("BIRTHDAYS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BIRTHDAYS_FILE));

        let facts_api_url =
            var("FACTS_API_URL").unwrap_or_else(|| DEFAULT_FACTS_API_URL.to_string());

        let timezone = var("BIRTHDAY_TIMEZONE")
            .map(|tz| parse_timezone(&tz))
            .transpose()?;

        let notify_once_per_day = match var("NOTIFY_ONCE_PER_DAY") {
            Some(value) => parse_flag("NOTIFY_ONCE_PER_DAY", &value)?,
            None => false,
        };

        // Optional: development guild ID for faster command registration
        let dev_guild_id = var("DEV_GUILD_ID")
            .and_then(|id| id.trim().parse::<u64>().ok())
            .filter(|id| *id != 0)
            .map(GuildId::new);

        Ok(Config {
            discord_token,
            birthdays_file,
            facts_api_url,
            timezone,
            notify_once_per_day,
            dev_guild_id,
        })
    }
}

/// Pure function: Parse a boolean environment flag
fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
