/// Birthday direct messages
use async_trait::async_trait;
use poise::serenity_prelude::{
    self as serenity, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp, User,
    UserId,
};
use std::sync::Arc;

use crate::models::BirthdayRecord;
use crate::services::facts::{FactSource, historical_fact};
use crate::utils::message_formatter::{BirthdayMessage, build_birthday_message};

/// Hot pink
const BIRTHDAY_COLOUR: (u8, u8, u8) = (255, 105, 180);

/// Errors that can occur while delivering a birthday message
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to resolve user {0}: {1}")]
    ResolveUser(UserId, #[source] serenity::Error),
    #[error("Failed to send direct message: {0}")]
    Send(#[source] serenity::Error),
}

/// Something that can deliver a birthday message to a user's DMs
#[async_trait]
pub trait DirectMessenger: Send + Sync {
    async fn resolve_user(&self, user_id: UserId) -> Result<User, DeliveryError>;

    async fn send_birthday(
        &self,
        user: &User,
        message: &BirthdayMessage,
    ) -> Result<(), DeliveryError>;
}

/// Convert a birthday message into a Discord embed
pub fn build_birthday_embed(message: &BirthdayMessage) -> CreateEmbed {
    let (r, g, b) = BIRTHDAY_COLOUR;
    CreateEmbed::new()
        .title(&message.title)
        .description(&message.description)
        .colour(Colour::from_rgb(r, g, b))
        .field(&message.fact_title, &message.fact, false)
        .footer(CreateEmbedFooter::new(&message.footer))
        .timestamp(Timestamp::now())
}

/// Delivers birthday messages through the Discord API
pub struct SerenityMessenger {
    http: Arc<serenity::Http>,
    cache: Arc<serenity::Cache>,
}

impl SerenityMessenger {
    pub fn new(http: Arc<serenity::Http>, cache: Arc<serenity::Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl DirectMessenger for SerenityMessenger {
    /// Look the user up in the cache, falling back to the API
    async fn resolve_user(&self, user_id: UserId) -> Result<User, DeliveryError> {
        if let Some(user) = self.cache.user(user_id) {
            return Ok((*user).clone());
        }

        self.http
            .get_user(user_id)
            .await
            .map_err(|e| DeliveryError::ResolveUser(user_id, e))
    }

    async fn send_birthday(
        &self,
        user: &User,
        message: &BirthdayMessage,
    ) -> Result<(), DeliveryError> {
        let dm = CreateMessage::new().embed(build_birthday_embed(message));

        user.direct_message(&self.http, dm)
            .await
            .map_err(DeliveryError::Send)?;

        Ok(())
    }
}

/// Resolve the user, fetch a fact for the record's date and DM the birthday message
///
/// No fact is requested for a user that cannot be resolved.
pub async fn send_birthday_message(
    facts: &dyn FactSource,
    messenger: &dyn DirectMessenger,
    user_id: UserId,
    record: &BirthdayRecord,
) -> Result<(), DeliveryError> {
    let user = messenger.resolve_user(user_id).await?;
    let fact = historical_fact(facts, &record.date).await;
    let message = build_birthday_message(&record.username, &fact);
    messenger.send_birthday(&user, &message).await
}
