//! In-memory fakes of the outbound integrations for service tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use serenity::async_trait;

use crate::{
    data::{
        deploy::Redeployer,
        discord::{CategoryRef, ChannelRef, ChatPlatform},
        hackthebox::MachineCatalog,
    },
    error::{catalog::CatalogError, AppError},
    model::machine::MachineRecord,
};

/// Catalog returning fixed records, or failing every request with `MissingField`.
#[derive(Default)]
pub struct FakeCatalog {
    pub upcoming: Vec<MachineRecord>,
    pub active: Vec<MachineRecord>,
    pub running: Option<MachineRecord>,
    /// When set, every fetch fails with `MissingField(field)`.
    pub missing_field: Option<String>,
}

impl FakeCatalog {
    fn check(&self) -> Result<(), CatalogError> {
        match &self.missing_field {
            Some(field) => Err(CatalogError::MissingField(field.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MachineCatalog for FakeCatalog {
    async fn fetch_running_machine(&self) -> Result<Option<MachineRecord>, CatalogError> {
        self.check()?;
        Ok(self.running.clone())
    }

    async fn fetch_upcoming_machines(&self) -> Result<Vec<MachineRecord>, CatalogError> {
        self.check()?;
        Ok(self.upcoming.clone())
    }

    async fn fetch_all_active_machines(&self) -> Result<Vec<MachineRecord>, CatalogError> {
        self.check()?;
        Ok(self.active.clone())
    }
}

/// A channel known to the fake platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeChannel {
    pub channel_id: u64,
    pub category_id: u64,
    pub name: String,
    pub topic: Option<String>,
}

#[derive(Default)]
struct FakePlatformState {
    categories: Vec<(String, CategoryRef)>,
    channels: Vec<FakeChannel>,
    created: Vec<FakeChannel>,
    messages: Vec<(ChannelRef, String)>,
    next_channel_id: u64,
}

/// Chat platform recording every call.
///
/// Created channels are added to the channel list, so a second sync sees them exactly as
/// Discord would.
#[derive(Default)]
pub struct FakePlatform {
    state: Mutex<FakePlatformState>,
    find_category_calls: AtomicUsize,
    /// Number of channel creations allowed before creation starts failing.
    fail_create_after: Option<usize>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category. Earlier categories win on name clashes, like guild order on Discord.
    pub fn with_category(self, name: &str, guild_id: u64, category_id: u64) -> Self {
        self.state.lock().unwrap().categories.push((
            name.to_string(),
            CategoryRef {
                guild_id,
                category_id,
            },
        ));
        self
    }

    /// Adds an existing text channel inside `category_id`.
    pub fn with_channel(self, category_id: u64, name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let channel_id = state.allocate_id();
            state.channels.push(FakeChannel {
                channel_id,
                category_id,
                name: name.to_string(),
                topic: None,
            });
        }
        self
    }

    /// Makes every channel creation after the first `count` fail.
    pub fn failing_create_after(mut self, count: usize) -> Self {
        self.fail_create_after = Some(count);
        self
    }

    pub fn created_channels(&self) -> Vec<FakeChannel> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created_channels().into_iter().map(|c| c.name).collect()
    }

    pub fn messages(&self) -> Vec<(ChannelRef, String)> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn find_category_calls(&self) -> usize {
        self.find_category_calls.load(Ordering::SeqCst)
    }
}

impl FakePlatformState {
    fn allocate_id(&mut self) -> u64 {
        self.next_channel_id += 1;
        1000 + self.next_channel_id
    }
}

#[async_trait]
impl ChatPlatform for FakePlatform {
    async fn find_category(&self, name: &str) -> Result<Option<CategoryRef>, AppError> {
        self.find_category_calls.fetch_add(1, Ordering::SeqCst);

        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|(category_name, _)| category_name == name)
            .map(|(_, category)| *category))
    }

    async fn channel_names(&self, category: &CategoryRef) -> Result<Vec<String>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .channels
            .iter()
            .filter(|channel| channel.category_id == category.category_id)
            .map(|channel| channel.name.clone())
            .collect())
    }

    async fn create_text_channel(
        &self,
        category: &CategoryRef,
        name: &str,
        topic: &str,
    ) -> Result<ChannelRef, AppError> {
        let mut state = self.state.lock().unwrap();

        if let Some(limit) = self.fail_create_after {
            if state.created.len() >= limit {
                return Err(serenity::Error::Other("channel creation failed").into());
            }
        }

        let channel = FakeChannel {
            channel_id: state.allocate_id(),
            category_id: category.category_id,
            name: name.to_string(),
            topic: Some(topic.to_string()),
        };
        state.channels.push(channel.clone());
        state.created.push(channel.clone());

        Ok(ChannelRef::new(channel.channel_id))
    }

    async fn send_message(&self, channel: ChannelRef, content: &str) -> Result<(), AppError> {
        self.state
            .lock()
            .unwrap()
            .messages
            .push((channel, content.to_string()));
        Ok(())
    }
}

/// Redeployer counting how often it was triggered.
#[derive(Default)]
pub struct FakeRedeployer {
    calls: AtomicUsize,
}

impl FakeRedeployer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Redeployer for FakeRedeployer {
    async fn redeploy(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
