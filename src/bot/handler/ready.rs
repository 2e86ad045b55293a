//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Logs the connected
//! account and marks the bot as online.

use dioxus_logger::tracing;
use serenity::all::{Context, OnlineStatus, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_presence(None, OnlineStatus::Online);
}
