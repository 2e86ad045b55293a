//! Prefixed text command dispatch.
//!
//! Command names are mapped to `Command` values once at startup. Each command executes as
//! a linear fetch, format and optional side effect sequence and yields the reply text.

use std::collections::HashMap;

use crate::{
    data::discord::ChatPlatform,
    error::AppError,
    service::{
        report::MachineReportService, sync::ChannelSyncService, update::UpdateService,
    },
    state::BotState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Sync channels for upcoming machines and list them.
    Upcoming,
    /// List currently active machines.
    Active,
    /// Describe the machine currently running.
    Running,
    /// Pull and restart the bot (allow-listed users only).
    Update,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Upcoming,
        Command::Active,
        Command::Running,
        Command::Update,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Upcoming => "upcoming",
            Command::Active => "active",
            Command::Running => "running",
            Command::Update => "update",
        }
    }

    /// Executes the command and returns the reply to post.
    ///
    /// # Arguments
    /// - `state` - Shared bot state
    /// - `platform` - Chat platform for channel side effects
    /// - `invocation` - Who issued the command
    ///
    /// # Returns
    /// - `Ok(String)` - Reply text, possibly longer than a single Discord message
    /// - `Err(AppError)` - The command failed; nothing is rolled back
    pub async fn execute(
        self,
        state: &BotState,
        platform: &dyn ChatPlatform,
        invocation: &Invocation,
    ) -> Result<String, AppError> {
        match self {
            Command::Upcoming => {
                ChannelSyncService::new(state.catalog.as_ref(), platform, &state.categories)
                    .sync_upcoming()
                    .await
            }
            Command::Active => {
                MachineReportService::new(state.catalog.as_ref())
                    .active_digest()
                    .await
            }
            Command::Running => {
                MachineReportService::new(state.catalog.as_ref())
                    .running_digest()
                    .await
            }
            Command::Update => {
                UpdateService::new(&state.admins, state.deployer.as_ref())
                    .update(invocation.author_id)
                    .await
            }
        }
    }
}

/// Context of a single command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    /// Discord user ID of the message author.
    pub author_id: u64,
}

/// Maps prefixed command names to commands.
pub struct CommandRegistry {
    prefix: String,
    commands: HashMap<&'static str, Command>,
}

impl CommandRegistry {
    /// Registers every command under its name with the given prefix.
    pub fn new(prefix: &str) -> Self {
        let commands = Command::ALL
            .into_iter()
            .map(|command| (command.name(), command))
            .collect();

        Self {
            prefix: prefix.to_string(),
            commands,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolves message content such as `.upcoming` to its command.
    ///
    /// Only the first word after the prefix is considered; trailing arguments are
    /// ignored since no command takes any. Names are case-sensitive.
    ///
    /// # Returns
    /// - `Some(Command)` - Content starts with the prefix followed by a registered name
    /// - `None` - Not a command, or an unknown one
    pub fn resolve(&self, content: &str) -> Option<Command> {
        let rest = content.trim_start().strip_prefix(self.prefix.as_str())?;
        let name = rest.split_whitespace().next()?;

        // "prefix name" with a space between is not a command
        if !rest.starts_with(name) {
            return None;
        }

        self.commands.get(name).copied()
    }
}
