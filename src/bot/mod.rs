//! Discord bot integration.
//!
//! The bot listens for prefixed text commands and answers in the channel the command was
//! issued in. Commands are resolved through a `CommandRegistry` built once at startup and
//! executed against the shared `BotState`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive messages posted in guild channels
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
