//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, integrations and startup code.
//! It wraps the domain-specific errors of each layer so `?` can be used across layer
//! boundaries. Errors that reach the command dispatcher are logged server-side and reported
//! to the user as a generic failure; they never terminate the process.

pub mod auth;
pub mod catalog;
pub mod config;

use thiserror::Error;

use crate::error::{auth::AuthError, catalog::CatalogError, config::ConfigError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthErr` exists for completeness
/// of the taxonomy, but access denial is normally handled locally by the update service and
/// turned into a user-visible reply instead of propagating.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Remote catalog request or payload error.
    ///
    /// Covers transport failures as well as responses whose shape or timestamps do not
    /// match what the catalog API is expected to return.
    #[error(transparent)]
    CatalogErr(#[from] CatalogError),

    /// Caller is not permitted to run the requested command.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The designated channel category does not exist in any guild the bot is a member of.
    ///
    /// # Fields
    /// - Name of the category that was searched for
    #[error("Channel category '{0}' was not found in any guild")]
    CategoryNotFound(String),

    /// The redeploy command could not be spawned.
    #[error("Failed to spawn redeploy command: {0}")]
    DeployErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
