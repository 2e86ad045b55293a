//! Upcoming machine channel provisioning.
//!
//! Cross-references the upcoming machines against the text channels in the designated
//! category and creates a channel for each machine that has none. Matching uses Discord's
//! normalized channel name (lowercase, whitespace replaced with `-`). Existing channels are
//! re-read from Discord on every sync; nothing is remembered between invocations.
//!
//! Channels are created one at a time. If a creation fails the sync stops there: channels
//! created before the failure remain and later machines are not attempted.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::{
    data::{
        discord::{CategoryRef, ChatPlatform},
        hackthebox::MachineCatalog,
    },
    error::AppError,
    model::machine::MachineRecord,
    service::category::CategoryCache,
};

pub const NO_UPCOMING_MESSAGE: &str = "Currently no upcoming machines :(";
const UPCOMING_HEADER: &str = "The following machines are upcoming:\n";
const PROVISIONED_ICON: &str = ":white_check_mark:";
const NOT_PROVISIONED_ICON: &str = ":x:";

/// An upcoming machine and whether its channel existed before this sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    pub machine: MachineRecord,
    /// True when a channel for the machine already existed when the sync started.
    pub provisioned: bool,
}

pub struct ChannelSyncService<'a> {
    catalog: &'a dyn MachineCatalog,
    platform: &'a dyn ChatPlatform,
    categories: &'a CategoryCache,
}

impl<'a> ChannelSyncService<'a> {
    pub fn new(
        catalog: &'a dyn MachineCatalog,
        platform: &'a dyn ChatPlatform,
        categories: &'a CategoryCache,
    ) -> Self {
        Self {
            catalog,
            platform,
            categories,
        }
    }

    /// Runs a full `upcoming` sync and returns the digest to post.
    ///
    /// When no machines are upcoming, returns `NO_UPCOMING_MESSAGE` without touching
    /// Discord at all.
    ///
    /// # Returns
    /// - `Ok(String)` - Digest with one line per machine and its provisioned indicator
    /// - `Err(AppError::CatalogErr)` - Fetching or decoding upcoming machines failed
    /// - `Err(AppError::CategoryNotFound)` - The designated category does not exist
    /// - `Err(AppError::DiscordErr)` - Listing or creating channels failed
    pub async fn sync_upcoming(&self) -> Result<String, AppError> {
        let entries = self.sync().await?;

        if entries.is_empty() {
            return Ok(NO_UPCOMING_MESSAGE.to_string());
        }

        Ok(format_upcoming_digest(&entries))
    }

    /// Provisions channels for upcoming machines and reports each machine's prior state.
    ///
    /// # Returns
    /// - `Ok(Vec<SyncEntry>)` - One entry per upcoming machine, in catalog order
    /// - `Err(AppError)` - See `sync_upcoming`
    pub async fn sync(&self) -> Result<Vec<SyncEntry>, AppError> {
        let machines = self.catalog.fetch_upcoming_machines().await?;

        if machines.is_empty() {
            return Ok(Vec::new());
        }

        let category = self.categories.resolve(self.platform).await?;

        let mut existing: HashSet<String> = self
            .platform
            .channel_names(&category)
            .await?
            .iter()
            .map(|name| fold_name(name))
            .collect();

        let mut entries = Vec::with_capacity(machines.len());

        for machine in machines {
            let folded = fold_name(&machine.name);
            let provisioned = existing.contains(&folded);

            if !provisioned {
                self.provision(&category, &machine).await?;
                existing.insert(folded);
            }

            entries.push(SyncEntry {
                machine,
                provisioned,
            });
        }

        Ok(entries)
    }

    /// Creates the channel for `machine` and posts its platform notes, if any.
    async fn provision(
        &self,
        category: &CategoryRef,
        machine: &MachineRecord,
    ) -> Result<(), AppError> {
        let channel = self
            .platform
            .create_text_channel(category, &machine.name, &machine.to_display_string(false))
            .await?;

        tracing::info!(
            "Created channel {} for upcoming machine {}",
            channel.channel_id,
            machine.name
        );

        if let Some(status) = machine
            .info_status
            .as_deref()
            .filter(|status| !status.trim().is_empty())
        {
            self.platform.send_long_message(channel, status).await?;
        }

        Ok(())
    }
}

/// Folds a name the way Discord normalizes text channel names.
///
/// Discord lowercases channel names and replaces whitespace with `-`, so a machine named
/// "Bounty Hunter" lives in channel `bounty-hunter`.
fn fold_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn format_upcoming_digest(entries: &[SyncEntry]) -> String {
    let mut text = String::from(UPCOMING_HEADER);

    for entry in entries {
        let indicator = if entry.provisioned {
            PROVISIONED_ICON
        } else {
            NOT_PROVISIONED_ICON
        };

        text.push_str(&format!(
            "\n- {} (Channel {})",
            entry.machine.to_display_string(true),
            indicator
        ));
    }

    text
}

#[cfg(test)]
mod test;
