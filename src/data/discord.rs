//! Discord chat platform access.
//!
//! `ChatPlatform` is the narrow surface the command services need from Discord: category
//! lookup, channel enumeration within a category, text channel creation and message
//! sending. `SerenityPlatform` implements it over Serenity's REST client using live
//! requests, so channel existence is always re-derived from Discord and never cached here.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, ChannelType, CreateChannel, GuildChannel, GuildId},
    async_trait,
    http::Http,
};

use crate::{error::AppError, util::message::split_message};

/// Maximum length of a single Discord message, in characters.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// A channel category located in a specific guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Discord channel ID of the category as a u64.
    pub category_id: u64,
}

/// A text channel messages can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelRef {
    /// Discord channel ID as a u64.
    pub channel_id: u64,
}

impl ChannelRef {
    pub fn new(channel_id: u64) -> Self {
        Self { channel_id }
    }
}

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Finds a category by exact name across every guild the bot is a member of.
    ///
    /// Guilds are searched in the order Discord lists them; the first match wins.
    async fn find_category(&self, name: &str) -> Result<Option<CategoryRef>, AppError>;

    /// Lists the names of the text channels currently inside `category`.
    async fn channel_names(&self, category: &CategoryRef) -> Result<Vec<String>, AppError>;

    /// Creates a text channel inside `category` with the given topic.
    async fn create_text_channel(
        &self,
        category: &CategoryRef,
        name: &str,
        topic: &str,
    ) -> Result<ChannelRef, AppError>;

    /// Sends a single message. `content` must fit within `MESSAGE_CHAR_LIMIT`.
    async fn send_message(&self, channel: ChannelRef, content: &str) -> Result<(), AppError>;

    /// Sends `content` as one or more messages, splitting on line boundaries so no message
    /// exceeds `MESSAGE_CHAR_LIMIT`. Blank content sends nothing.
    async fn send_long_message(&self, channel: ChannelRef, content: &str) -> Result<(), AppError> {
        for chunk in split_message(content, MESSAGE_CHAR_LIMIT) {
            self.send_message(channel, &chunk).await?;
        }

        Ok(())
    }
}

/// `ChatPlatform` backed by Serenity's HTTP client.
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    async fn find_category(&self, name: &str) -> Result<Option<CategoryRef>, AppError> {
        let guilds = self.http.get_guilds(None, None).await?;

        for guild in guilds {
            let channels = self.http.get_channels(guild.id).await?;

            if let Some(category_id) = find_category_in(&channels, name) {
                return Ok(Some(CategoryRef {
                    guild_id: guild.id.get(),
                    category_id: category_id.get(),
                }));
            }
        }

        Ok(None)
    }

    async fn channel_names(&self, category: &CategoryRef) -> Result<Vec<String>, AppError> {
        let channels = self
            .http
            .get_channels(GuildId::new(category.guild_id))
            .await?;

        Ok(text_channel_names_in(
            &channels,
            ChannelId::new(category.category_id),
        ))
    }

    async fn create_text_channel(
        &self,
        category: &CategoryRef,
        name: &str,
        topic: &str,
    ) -> Result<ChannelRef, AppError> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .category(ChannelId::new(category.category_id))
            .topic(topic);

        let channel = GuildId::new(category.guild_id)
            .create_channel(&self.http, builder)
            .await?;

        Ok(ChannelRef::new(channel.id.get()))
    }

    async fn send_message(&self, channel: ChannelRef, content: &str) -> Result<(), AppError> {
        ChannelId::new(channel.channel_id)
            .say(&self.http, content)
            .await?;

        Ok(())
    }
}

/// Returns the ID of the first category channel named exactly `name`.
pub fn find_category_in(channels: &[GuildChannel], name: &str) -> Option<ChannelId> {
    channels
        .iter()
        .find(|channel| channel.kind == ChannelType::Category && channel.name == name)
        .map(|channel| channel.id)
}

/// Returns the names of the text channels whose parent is `category_id`.
pub fn text_channel_names_in(channels: &[GuildChannel], category_id: ChannelId) -> Vec<String> {
    channels
        .iter()
        .filter(|channel| {
            channel.kind == ChannelType::Text && channel.parent_id == Some(category_id)
        })
        .map(|channel| channel.name.clone())
        .collect()
}
