use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{Data, Error};
use crate::schedule::start_schedule_manager;
use crate::services::SerenityMessenger;

/// Handle a gateway Ready event
///
/// Runs on the first connection and on every reconnect: the command set is
/// registered again, and the birthday check is started if it isn't running yet.
pub async fn handle_ready(
    ctx: &serenity::Context,
    ready: &serenity::Ready,
    framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) {
    info!("Birthday Bot is ready! Logged in as {}", ready.user.name);

    let commands = &framework.options().commands;
    let registered = match data.dev_guild_id {
        Some(guild_id) => {
            info!("Registering commands in development guild: {}", guild_id);
            poise::builtins::register_in_guild(ctx, commands, guild_id).await
        }
        None => {
            info!("Registering commands globally (may take up to 1 hour)");
            poise::builtins::register_globally(ctx, commands).await
        }
    };

    match registered {
        Ok(()) => info!("Synced {} command(s)", commands.len()),
        Err(e) => error!("Failed to sync commands: {}", e),
    }

    let messenger = Arc::new(SerenityMessenger::new(ctx.http.clone(), ctx.cache.clone()));
    if start_schedule_manager(data.clone(), messenger) {
        info!("Birthday check task started");
    }
}
