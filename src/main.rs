mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing::{self, Level};

use crate::{config::Config, error::AppError, scheduler::daily_sync};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let state = startup::build_state(&config, http_client);

    tracing::info!(
        "Starting bot with prefix '{}' for category '{}'",
        config.command_prefix,
        config.panorama_category
    );

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;

    // Start daily upcoming sync scheduler
    let scheduler_schedule = config.daily_sync_cron.clone();
    let scheduler_channel = config.daily_report_channel_id;
    tokio::spawn(async move {
        if let Err(e) = daily_sync::start_scheduler(
            state,
            discord_http,
            &scheduler_schedule,
            scheduler_channel,
        )
        .await
        {
            tracing::error!("Daily sync scheduler error: {}", e);
        }
    });

    bot::start::start_bot(bot_client).await
}
