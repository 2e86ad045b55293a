//! Administrative self-update.
//!
//! Only callers on a fixed allow-list may trigger a redeploy. Anyone else receives the
//! access-denied reply and nothing else happens.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::{data::deploy::Redeployer, error::auth::AuthError, error::AppError};

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied.";
pub const UPDATING_MESSAGE: &str = "Pulling latest changes and restarting...";

/// Discord user IDs allowed to run administrative commands.
#[derive(Debug, Clone, Default)]
pub struct AdminAllowList {
    user_ids: HashSet<u64>,
}

impl AdminAllowList {
    pub fn new(user_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            user_ids: user_ids.into_iter().collect(),
        }
    }

    /// Checks whether `user_id` is on the allow-list.
    ///
    /// # Returns
    /// - `Ok(())` - The user may run administrative commands
    /// - `Err(AuthError::AccessDenied)` - The user is not on the list
    pub fn authorize(&self, user_id: u64) -> Result<(), AuthError> {
        if self.user_ids.contains(&user_id) {
            Ok(())
        } else {
            Err(AuthError::AccessDenied { user_id })
        }
    }
}

pub struct UpdateService<'a> {
    admins: &'a AdminAllowList,
    deployer: &'a dyn Redeployer,
}

impl<'a> UpdateService<'a> {
    pub fn new(admins: &'a AdminAllowList, deployer: &'a dyn Redeployer) -> Self {
        Self { admins, deployer }
    }

    /// Triggers a redeploy on behalf of `user_id`.
    ///
    /// Denial is a normal outcome, not an error: the caller gets `ACCESS_DENIED_MESSAGE`
    /// and the redeployer is never invoked.
    ///
    /// # Returns
    /// - `Ok(String)` - Reply for the caller
    /// - `Err(AppError::DeployErr)` - The redeploy command could not be launched
    pub async fn update(&self, user_id: u64) -> Result<String, AppError> {
        if let Err(err) = self.admins.authorize(user_id) {
            tracing::warn!("{}", err);
            return Ok(ACCESS_DENIED_MESSAGE.to_string());
        }

        tracing::info!("User {} triggered a redeploy", user_id);
        self.deployer.redeploy().await?;

        Ok(UPDATING_MESSAGE.to_string())
    }
}
