use std::collections::HashSet;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_HACKTHEBOX_API_URL: &str = "https://labs.hackthebox.com/api/v4";
const DEFAULT_COMMAND_PREFIX: &str = ".";
const DEFAULT_PANORAMA_CATEGORY: &str = "saturday-night-panorama-bar";
/// Every day at 18:00 UTC.
const DEFAULT_DAILY_SYNC_CRON: &str = "0 0 18 * * *";
const DEFAULT_UPDATE_COMMAND: &str = "git pull && sudo systemctl restart panorama";

pub struct Config {
    pub discord_bot_token: String,
    pub hackthebox_token: String,
    pub hackthebox_api_url: Url,

    pub command_prefix: String,
    pub panorama_category: String,

    pub daily_sync_cron: String,
    pub daily_report_channel_id: Option<u64>,

    pub admin_user_ids: HashSet<u64>,
    pub update_command: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones so that a blank line in a `.env`
    /// file falls back to the default instead of producing an unusable setting.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            hackthebox_token: require("HACKTHEBOX_TOKEN")?,
            hackthebox_api_url: parse_base_url(
                "HACKTHEBOX_API_URL",
                &get("HACKTHEBOX_API_URL")
                    .unwrap_or_else(|| DEFAULT_HACKTHEBOX_API_URL.to_string()),
            )?,
            command_prefix: get("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            panorama_category: get("PANORAMA_CATEGORY")
                .unwrap_or_else(|| DEFAULT_PANORAMA_CATEGORY.to_string()),
            daily_sync_cron: get("DAILY_SYNC_CRON")
                .unwrap_or_else(|| DEFAULT_DAILY_SYNC_CRON.to_string()),
            daily_report_channel_id: get("DAILY_REPORT_CHANNEL_ID")
                .map(|value| parse_id("DAILY_REPORT_CHANNEL_ID", &value))
                .transpose()?,
            admin_user_ids: get("ADMIN_USER_IDS")
                .map(|value| parse_id_list("ADMIN_USER_IDS", &value))
                .transpose()?
                .unwrap_or_default(),
            update_command: get("UPDATE_COMMAND")
                .unwrap_or_else(|| DEFAULT_UPDATE_COMMAND.to_string()),
        })
    }
}

fn parse_base_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' cannot be used as a base URL", value),
        });
    }

    Ok(url)
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    let id = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a Discord ID: {}", value.trim(), e),
        })?;

    // Discord snowflakes are never zero
    if id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "Discord IDs must be non-zero".to_string(),
        });
    }

    Ok(id)
}

fn parse_id_list(name: &str, value: &str) -> Result<HashSet<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_id(name, id))
        .collect()
}
