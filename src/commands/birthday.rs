use poise::CreateReply;
use tracing::{error, info};

use crate::{
    models::{Context, Error},
    services::BirthdayError,
    utils::messages::{
        build_birthday_display, build_birthday_not_set, build_birthday_removed,
        build_birthday_saved, build_invalid_date_error, build_nothing_to_remove,
        build_storage_error,
    },
};

/// Reply to the invoking user only
async fn reply_ephemeral(ctx: Context<'_>, content: String) -> Result<(), Error> {
    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Name to greet the user with: server nickname if any, else their global name
async fn author_display_name(ctx: Context<'_>) -> String {
    match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().display_name().to_string(),
    }
}

/// Set your birthday (MM/DD format)
#[poise::command(slash_command, rename = "setbirthday")]
pub async fn set_birthday(
    ctx: Context<'_>,
    #[description = "Your birthday, e.g. 12/25 or 3-15"] date: String,
) -> Result<(), Error> {
    let user_id = ctx.author().id;
    let display_name = author_display_name(ctx).await;

    let content = match ctx
        .data()
        .birthdays
        .set_birthday(user_id, &display_name, &date)
        .await
    {
        Ok(saved) => {
            info!("User {} set birthday to {}", user_id, saved);
            build_birthday_saved(&saved.to_string())
        }
        Err(BirthdayError::Validation(e)) => {
            info!("Rejected birthday '{}' from user {}: {}", date, user_id, e);
            build_invalid_date_error()
        }
        Err(e) => {
            error!("Failed to save birthday for user {}: {}", user_id, e);
            build_storage_error()
        }
    };

    reply_ephemeral(ctx, content).await
}

/// Check your saved birthday
#[poise::command(slash_command, rename = "mybirthday")]
pub async fn my_birthday(ctx: Context<'_>) -> Result<(), Error> {
    let content = match ctx.data().birthdays.get_birthday(ctx.author().id) {
        Ok(record) => build_birthday_display(&record.date),
        Err(_) => build_birthday_not_set(),
    };

    reply_ephemeral(ctx, content).await
}

/// Remove your birthday from the bot
#[poise::command(slash_command, rename = "removebirthday")]
pub async fn remove_birthday(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id;

    let content = match ctx.data().birthdays.remove_birthday(user_id).await {
        Ok(_) => {
            info!("User {} removed their birthday", user_id);
            build_birthday_removed()
        }
        Err(BirthdayError::NotFound) => build_nothing_to_remove(),
        Err(e) => {
            error!("Failed to remove birthday for user {}: {}", user_id, e);
            build_storage_error()
        }
    };

    reply_ephemeral(ctx, content).await
}
