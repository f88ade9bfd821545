use tracing::error;

use crate::models::{Data, Error};

/// Log framework and command errors
///
/// Nothing is sent back to the user; failures only show up in the logs.
pub async fn handle_framework_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                "Command '{}' failed for user {}: {}",
                ctx.command().qualified_name,
                ctx.author().id,
                error
            );
        }
        other => error!("Command error: {}", other),
    }
}
