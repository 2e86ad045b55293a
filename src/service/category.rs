//! Designated category lookup with a process-lifetime cache.
//!
//! The category is resolved by name the first time a sync needs it and the result is kept
//! for the lifetime of the process. There is no invalidation: if the category is renamed or
//! recreated on Discord, the process must be restarted to pick that up. Failed lookups are
//! not cached, so creating the category later takes effect on the next sync.

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::sync::OnceCell;

use crate::{
    data::discord::{CategoryRef, ChatPlatform},
    error::AppError,
};

/// Cheap to clone; clones share the cached value.
#[derive(Clone)]
pub struct CategoryCache {
    name: Arc<str>,
    resolved: Arc<OnceCell<CategoryRef>>,
}

impl CategoryCache {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            resolved: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the cached category, looking it up on `platform` if not resolved yet.
    ///
    /// Concurrent first calls are serialized by the cell, so only one lookup reaches the
    /// platform.
    ///
    /// # Arguments
    /// - `platform` - Chat platform used for the lookup on a cache miss
    ///
    /// # Returns
    /// - `Ok(CategoryRef)` - Cached or freshly resolved category
    /// - `Err(AppError::CategoryNotFound)` - No guild has a category with this name
    /// - `Err(AppError::DiscordErr)` - The lookup request failed
    pub async fn resolve(&self, platform: &dyn ChatPlatform) -> Result<CategoryRef, AppError> {
        let category = self
            .resolved
            .get_or_try_init(|| async {
                let category = platform
                    .find_category(&self.name)
                    .await?
                    .ok_or_else(|| AppError::CategoryNotFound(self.name.to_string()))?;

                tracing::info!(
                    "Resolved category '{}' to {} in guild {}",
                    self.name,
                    category.category_id,
                    category.guild_id
                );

                Ok::<_, AppError>(category)
            })
            .await?;

        Ok(*category)
    }

    /// Returns the cached category without performing a lookup.
    #[cfg(test)]
    pub fn cached(&self) -> Option<CategoryRef> {
        self.resolved.get().copied()
    }
}
