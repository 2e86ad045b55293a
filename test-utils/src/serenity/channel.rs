//! Test factory for creating Serenity GuildChannel objects.

use serde_json::json;
use serenity::all::GuildChannel;

/// Discord channel type for guild text channels.
const CHANNEL_TYPE_TEXT: u8 = 0;
/// Discord channel type for categories.
const CHANNEL_TYPE_CATEGORY: u8 = 4;

/// Creates a test text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `parent_id` - Category the channel sits in, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, CHANNEL_TYPE_TEXT, parent_id)
}

/// Creates a test category channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_category(category_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    create_test_channel(category_id, guild_id, name, CHANNEL_TYPE_CATEGORY, None)
}

fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(json!({
        "id": channel_id.to_string(),
        "type": kind,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": parent_id.map(|id| id.to_string()),
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
