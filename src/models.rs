use chrono_tz::Tz;
use poise::serenity_prelude::GuildId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::services::{BirthdayService, FactSource};

/// A recurring calendar date without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Canonical `M/D` form, as stored on disk and compared by the daily check
impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

/// A user's stored birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRecord {
    /// Canonical `M/D` date
    pub date: String,
    /// Display name captured when the birthday was set
    pub username: String,
    /// Year of the last delivered birthday message (once-per-day mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notified_year: Option<i32>,
}

impl BirthdayRecord {
    pub fn new(date: MonthDay, username: impl Into<String>) -> Self {
        Self {
            date: date.to_string(),
            username: username.into(),
            last_notified_year: None,
        }
    }
}

/// Bot state shared across all handlers and the daily check
#[derive(Clone)]
pub struct Data {
    /// Birthday storage and command logic
    pub birthdays: Arc<BirthdayService>,
    /// Source of the historical fact added to each birthday message
    pub facts: Arc<dyn FactSource>,
    /// Time zone used to decide what "today" is (process local time when unset)
    pub timezone: Option<Tz>,
    /// Skip users who already got their message this year
    pub notify_once_per_day: bool,
    /// Register commands in this guild only
    pub dev_guild_id: Option<GuildId>,
    /// Set once the daily check task has been spawned
    pub scheduler_started: Arc<AtomicBool>,
}

impl Data {
    /// Create a new Data instance with default scheduling settings
    pub fn new(birthdays: BirthdayService, facts: Arc<dyn FactSource>) -> Self {
        Self {
            birthdays: Arc::new(birthdays),
            facts,
            timezone: None,
            notify_once_per_day: false,
            dev_guild_id: None,
            scheduler_started: Arc::new(AtomicBool::new(false)),
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
