use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{
    bot::command::{Command, CommandRegistry, Invocation},
    data::discord::{ChannelRef, ChatPlatform, SerenityPlatform},
    state::BotState,
};

/// Handle message creation in a channel
pub async fn handle_message(
    state: &BotState,
    registry: &CommandRegistry,
    ctx: Context,
    message: Message,
) {
    // Ignore other bots and our own replies
    if message.author.bot {
        return;
    }

    let Some(command) = registry.resolve(&message.content) else {
        return;
    };

    tracing::info!(
        "{} invoked {}{} in channel {}",
        message.author.name,
        registry.prefix(),
        command.name(),
        message.channel_id
    );

    let platform = SerenityPlatform::new(ctx.http.clone());
    let invocation = Invocation {
        author_id: message.author.id.get(),
    };

    let reply = run_command(state, registry, &platform, command, &invocation).await;

    let channel = ChannelRef::new(message.channel_id.get());
    if let Err(e) = platform.send_long_message(channel, &reply).await {
        tracing::error!(
            "Failed to reply to {}{} in channel {}: {}",
            registry.prefix(),
            command.name(),
            message.channel_id,
            e
        );
    }
}

/// Executes `command` and returns the reply, replacing failures with a generic notice.
async fn run_command(
    state: &BotState,
    registry: &CommandRegistry,
    platform: &dyn ChatPlatform,
    command: Command,
    invocation: &Invocation,
) -> String {
    match command.execute(state, platform, invocation).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(
                "Command {}{} failed: {}",
                registry.prefix(),
                command.name(),
                e
            );
            failure_reply(registry.prefix(), command)
        }
    }
}

fn failure_reply(prefix: &str, command: Command) -> String {
    format!(
        "Something went wrong while running `{}{}`.",
        prefix,
        command.name()
    )
}
