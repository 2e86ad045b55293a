//! Self-update trigger.
//!
//! The `update` command hands off to the deployment environment: pull the latest source and
//! restart the service. The bot only launches the configured shell command; it does not
//! wait for it, verify the restart, retry, or roll back.

use dioxus_logger::tracing;
use serenity::async_trait;
use tokio::process::Command;

use crate::error::AppError;

#[async_trait]
pub trait Redeployer: Send + Sync {
    /// Starts the redeploy. Returns once the command has been launched.
    async fn redeploy(&self) -> Result<(), AppError>;
}

/// Runs a shell command such as `git pull && sudo systemctl restart panorama`.
pub struct ShellRedeployer {
    command: String,
}

impl ShellRedeployer {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

#[async_trait]
impl Redeployer for ShellRedeployer {
    async fn redeploy(&self) -> Result<(), AppError> {
        tracing::info!("Running redeploy command: {}", self.command);

        let mut child = Command::new("sh").arg("-c").arg(&self.command).spawn()?;

        // The restart usually kills this process before the command exits
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => tracing::info!("Redeploy command exited with {}", status),
                Err(e) => tracing::error!("Failed to wait for redeploy command: {}", e),
            }
        });

        Ok(())
    }
}
