use dioxus_logger::tracing;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::{command::CommandRegistry, handler::Handler},
    config::Config,
    error::AppError,
    state::BotState,
};

/// Builds the Discord client and returns it with its shared HTTP client.
///
/// The HTTP client is handed to the scheduler so scheduled syncs and command handlers use
/// the same Discord connection and rate limiter.
///
/// # Arguments
/// - `config` - Application configuration with bot token and command prefix
/// - `state` - Shared bot state for command execution
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: BotState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(state, CommandRegistry::new(&config.command_prefix));

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the Discord client until it shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
