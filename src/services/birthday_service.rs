/// Birthday service - handles business logic for the birthday commands
use poise::serenity_prelude::UserId;
use tracing::warn;

use crate::models::{BirthdayRecord, MonthDay};
use crate::store::{BirthdayStore, StoreError};
use crate::utils::validation::{ValidationError, parse_birthday_date};

/// Errors returned by birthday operations
#[derive(Debug, thiserror::Error)]
pub enum BirthdayError {
    #[error("Invalid birthday: {0}")]
    Validation(#[from] ValidationError),
    #[error("No birthday stored for this user")]
    NotFound,
    #[error("Failed to persist birthdays: {0}")]
    Persistence(#[from] StoreError),
}

/// Service for birthday-related operations
pub struct BirthdayService {
    store: BirthdayStore,
}

impl BirthdayService {
    /// Create a new birthday service
    pub fn new(store: BirthdayStore) -> Self {
        Self { store }
    }

    /// Validate and save a user's birthday, returning the normalized date
    ///
    /// On a persistence error the new value stays in memory and is written
    /// with the next successful save.
    pub async fn set_birthday(
        &self,
        user_id: UserId,
        display_name: &str,
        input: &str,
    ) -> Result<MonthDay, BirthdayError> {
        let date = parse_birthday_date(input)?;

        self.store.upsert(user_id, BirthdayRecord::new(date, display_name));
        self.store.save().await?;

        Ok(date)
    }

    /// Get a user's birthday
    pub fn get_birthday(&self, user_id: UserId) -> Result<BirthdayRecord, BirthdayError> {
        self.store.get(user_id).ok_or(BirthdayError::NotFound)
    }

    /// Remove a user's birthday; nothing is written when there was none
    pub async fn remove_birthday(&self, user_id: UserId) -> Result<BirthdayRecord, BirthdayError> {
        let removed = self.store.remove(user_id).ok_or(BirthdayError::NotFound)?;
        self.store.save().await?;
        Ok(removed)
    }

    /// Get all users whose birthday falls on `date`
    pub fn birthdays_on(&self, date: MonthDay) -> Vec<(UserId, BirthdayRecord)> {
        self.store
            .all()
            .into_iter()
            .filter(|(user_id, record)| match parse_birthday_date(&record.date) {
                Ok(stored) => stored == date,
                Err(e) => {
                    warn!(
                        "Ignoring unreadable birthday '{}' for user {}: {}",
                        record.date, user_id, e
                    );
                    false
                }
            })
            .collect()
    }

    /// Remember that a user got their birthday message in `year`
    pub async fn mark_notified(&self, user_id: UserId, year: i32) -> Result<(), StoreError> {
        if self.store.set_last_notified(user_id, year) {
            self.store.save().await?;
        }
        Ok(())
    }
}
