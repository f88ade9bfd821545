use super::BirthdayStore;
use poise::serenity_prelude::UserId;
use tracing::warn;

use crate::models::BirthdayRecord;

impl BirthdayStore {
    /// Save or replace a user's birthday
    pub fn upsert(&self, user_id: UserId, record: BirthdayRecord) {
        self.records.insert(user_id.to_string(), record);
    }

    /// Get a user's birthday
    pub fn get(&self, user_id: UserId) -> Option<BirthdayRecord> {
        self.records
            .get(&user_id.to_string())
            .map(|entry| entry.value().clone())
    }

    /// Remove a user's birthday, returning it if there was one
    pub fn remove(&self, user_id: UserId) -> Option<BirthdayRecord> {
        self.records
            .remove(&user_id.to_string())
            .map(|(_, record)| record)
    }

    /// Record the year a user last received their birthday message
    ///
    /// Returns false if the user no longer has a birthday stored.
    pub fn set_last_notified(&self, user_id: UserId, year: i32) -> bool {
        match self.records.get_mut(&user_id.to_string()) {
            Some(mut entry) => {
                entry.last_notified_year = Some(year);
                true
            }
            None => false,
        }
    }

    /// Snapshot of every record, ordered by user ID
    ///
    /// Keys that are not valid user IDs are skipped.
    pub fn all(&self) -> Vec<(UserId, BirthdayRecord)> {
        let mut records: Vec<(UserId, BirthdayRecord)> = self
            .records
            .iter()
            .filter_map(|entry| match parse_user_id(entry.key()) {
                Some(user_id) => Some((user_id, entry.value().clone())),
                None => {
                    warn!("Skipping birthday with invalid user ID '{}'", entry.key());
                    None
                }
            })
            .collect();

        records.sort_by_key(|(user_id, _)| *user_id);
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Pure function: Parse a stored key back into a user ID
fn parse_user_id(key: &str) -> Option<UserId> {
    key.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
}
