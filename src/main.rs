mod commands;
mod config;
mod constants;
mod handlers;
mod models;
mod schedule;
mod services;
mod store;
mod utils;

use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    commands::{my_birthday, remove_birthday, set_birthday},
    config::Config,
    constants::LOG_DIRECTIVE,
    handlers::{handle_framework_error, handle_ready},
    models::Data,
    services::{BirthdayService, NumbersApiClient},
    store::BirthdayStore,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    // Load birthdays; a missing or broken file means starting empty
    let store = BirthdayStore::load(&config.birthdays_file).await;
    if store.is_empty() {
        info!("No birthdays stored yet in {}", store.path().display());
    } else {
        info!("{} birthday(s) stored in {}", store.len(), store.path().display());
    }

    // Initialize bot data
    let data = build_data(&config, store);

    // Create and start the bot
    if let Err(e) = start_bot(config.discord_token, data).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Assemble the shared bot state from configuration
fn build_data(config: &Config, store: BirthdayStore) -> Data {
    let facts = Arc::new(NumbersApiClient::new(&config.facts_api_url));
    let mut data = Data::new(BirthdayService::new(store), facts);
    data.timezone = config.timezone;
    data.notify_once_per_day = config.notify_once_per_day;
    data.dev_guild_id = config.dev_guild_id;

    if let Some(tz) = data.timezone {
        info!("Birthdays are checked against the date in {}", tz);
    }
    if data.notify_once_per_day {
        info!("Birthday messages are sent at most once per year per user");
    }

    data
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    data: Data,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![set_birthday(), my_birthday(), remove_birthday()],
            on_error: |error| Box::pin(handle_framework_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(async move {
                    if let serenity::FullEvent::Ready { data_about_bot } = event {
                        handle_ready(ctx, data_about_bot, framework, data).await;
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| Box::pin(async move { Ok(data) }))
        .build();

    // Slash commands and DMs need no privileged intents
    let intents = serenity::GatewayIntents::non_privileged();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
