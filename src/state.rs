//! Bot state shared by the message handler and the scheduler.
//!
//! Holds the long-lived collaborators every command needs. The Discord side is not part of
//! the state: each invocation wraps the HTTP client of its own context in a
//! `SerenityPlatform`.

use std::sync::Arc;

use crate::{
    data::{deploy::Redeployer, hackthebox::MachineCatalog},
    service::{category::CategoryCache, update::AdminAllowList},
};

/// Cheap to clone; all fields are reference-counted or small.
#[derive(Clone)]
pub struct BotState {
    /// Machine catalog used by every reporting command.
    pub catalog: Arc<dyn MachineCatalog>,

    /// Designated category, resolved once per process.
    pub categories: CategoryCache,

    /// Users allowed to run `update`.
    pub admins: Arc<AdminAllowList>,

    /// Triggers the self-update.
    pub deployer: Arc<dyn Redeployer>,
}

impl BotState {
    pub fn new(
        catalog: Arc<dyn MachineCatalog>,
        categories: CategoryCache,
        admins: AdminAllowList,
        deployer: Arc<dyn Redeployer>,
    ) -> Self {
        Self {
            catalog,
            categories,
            admins: Arc::new(admins),
            deployer,
        }
    }
}
