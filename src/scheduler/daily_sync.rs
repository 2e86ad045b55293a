use dioxus_logger::tracing;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::discord::{ChannelRef, ChatPlatform, SerenityPlatform},
    error::AppError,
    service::sync::ChannelSyncService,
    state::BotState,
};

/// Starts the daily upcoming machine sync.
///
/// The job performs the same channel provisioning as the `upcoming` command. Its digest is
/// posted to `report_channel` when one is configured and logged otherwise.
///
/// # Arguments
/// - `state`: Shared bot state
/// - `discord_http`: Discord HTTP client used for channel creation and the report
/// - `schedule`: Six-field cron expression (seconds first), evaluated in UTC
/// - `report_channel`: Channel ID that receives the digest, if any
pub async fn start_scheduler(
    state: BotState,
    discord_http: Arc<Http>,
    schedule: &str,
    report_channel: Option<u64>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            let platform = SerenityPlatform::new(http);

            if let Err(e) = run_daily_sync(&state, &platform, report_channel).await {
                tracing::error!("Error running daily upcoming sync: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Daily upcoming sync scheduled ({})", schedule);

    Ok(())
}

/// Runs one scheduled sync and delivers its digest.
async fn run_daily_sync(
    state: &BotState,
    platform: &dyn ChatPlatform,
    report_channel: Option<u64>,
) -> Result<(), AppError> {
    let digest = ChannelSyncService::new(state.catalog.as_ref(), platform, &state.categories)
        .sync_upcoming()
        .await?;

    match report_channel {
        Some(channel_id) => {
            platform
                .send_long_message(ChannelRef::new(channel_id), &digest)
                .await?
        }
        None => tracing::info!("Daily upcoming sync finished:\n{}", digest),
    }

    Ok(())
}
