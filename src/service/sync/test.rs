use super::*;
use crate::{
    data::{
        discord::ChannelRef,
        fake::{FakeCatalog, FakePlatform},
    },
    error::catalog::CatalogError,
};
use test_utils::{builder::MachineJsonBuilder, fixture::machine::upcoming_machine};

const CATEGORY: &str = "saturday-night-panorama-bar";
const GUILD_ID: u64 = 1;
const CATEGORY_ID: u64 = 10;

fn machine(name: &str) -> MachineRecord {
    MachineRecord::from_json(&upcoming_machine(name)).expect("fixture should normalize")
}

fn catalog_with(names: &[&str]) -> FakeCatalog {
    FakeCatalog {
        upcoming: names.iter().map(|name| machine(name)).collect(),
        ..Default::default()
    }
}

fn platform() -> FakePlatform {
    FakePlatform::new().with_category(CATEGORY, GUILD_ID, CATEGORY_ID)
}

/// Tests the empty-catalog case.
///
/// Expected: the fixed "none upcoming" message and no Discord calls at all
#[tokio::test]
async fn no_upcoming_machines() -> Result<(), AppError> {
    let catalog = catalog_with(&[]);
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    let digest = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync_upcoming()
        .await?;

    assert_eq!(digest, "Currently no upcoming machines :(");
    assert!(platform.created_channels().is_empty());
    assert_eq!(platform.find_category_calls(), 0);

    Ok(())
}

/// Tests provisioning a single new machine.
///
/// Expected: one channel named after the machine, digest line marked not provisioned
#[tokio::test]
async fn creates_channel_for_new_machine() -> Result<(), AppError> {
    let catalog = catalog_with(&["Zipper"]);
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    let digest = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync_upcoming()
        .await?;

    assert_eq!(platform.created_names(), vec!["Zipper"]);
    assert_eq!(
        digest,
        format!(
            "The following machines are upcoming:\n\n- {} (Channel :x:)",
            machine("Zipper").to_display_string(true)
        )
    );

    Ok(())
}

/// Tests that the new channel lives in the category and carries the nameless display string.
///
/// Expected: channel in category 10 with the record's topic
#[tokio::test]
async fn channel_topic_is_display_string_without_name() -> Result<(), AppError> {
    let catalog = catalog_with(&["Zipper"]);
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    let created = platform.created_channels();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].category_id, CATEGORY_ID);
    assert_eq!(
        created[0].topic.as_deref(),
        Some(machine("Zipper").to_display_string(false).as_str())
    );

    Ok(())
}

/// Tests case-insensitive matching against existing channels.
///
/// Expected: "aqua" recognised as provisioned by channel "Aqua", nothing created
#[tokio::test]
async fn matches_existing_channel_case_insensitively() -> Result<(), AppError> {
    let catalog = catalog_with(&["aqua"]);
    let platform = platform().with_channel(CATEGORY_ID, "Aqua");
    let categories = CategoryCache::new(CATEGORY);

    let entries = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    assert!(platform.created_channels().is_empty());
    assert_eq!(entries.len(), 1);
    assert!(entries[0].provisioned);

    Ok(())
}

/// Tests matching a machine name containing spaces against Discord's dashed channel name.
///
/// Expected: "Bounty Hunter" recognised as provisioned by channel "bounty-hunter"
#[tokio::test]
async fn matches_channel_with_spaces_replaced() -> Result<(), AppError> {
    let catalog = catalog_with(&["Bounty Hunter"]);
    let platform = platform().with_channel(CATEGORY_ID, "bounty-hunter");
    let categories = CategoryCache::new(CATEGORY);

    let entries = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    assert!(platform.created_channels().is_empty());
    assert!(entries[0].provisioned);

    Ok(())
}

#[test]
fn folds_names_like_discord() {
    assert_eq!(fold_name("Bounty Hunter"), "bounty-hunter");
    assert_eq!(fold_name("  Two   Spaces "), "two-spaces");
    assert_eq!(fold_name("Zipper"), "zipper");
}

/// Tests that channels in other categories do not count as provisioned.
///
/// Expected: channel created despite a same-named channel elsewhere
#[tokio::test]
async fn ignores_channels_outside_category() -> Result<(), AppError> {
    let catalog = catalog_with(&["Zipper"]);
    let platform = platform().with_channel(99, "zipper");
    let categories = CategoryCache::new(CATEGORY);

    ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    assert_eq!(platform.created_names(), vec!["Zipper"]);

    Ok(())
}

/// Tests a mixed catalog of provisioned and new machines.
///
/// Expected: catalog order kept, indicators per machine, only new ones created
#[tokio::test]
async fn mixed_digest_keeps_catalog_order() -> Result<(), AppError> {
    let catalog = catalog_with(&["Alpha", "Bravo", "Charlie"]);
    let platform = platform().with_channel(CATEGORY_ID, "bravo");
    let categories = CategoryCache::new(CATEGORY);

    let digest = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync_upcoming()
        .await?;

    assert_eq!(platform.created_names(), vec!["Alpha", "Charlie"]);

    let lines: Vec<&str> = digest.lines().collect();
    assert_eq!(lines[0], "The following machines are upcoming:");
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("- Name: Alpha |") && lines[2].ends_with("(Channel :x:)"));
    assert!(
        lines[3].starts_with("- Name: Bravo |")
            && lines[3].ends_with("(Channel :white_check_mark:)")
    );
    assert!(lines[4].starts_with("- Name: Charlie |") && lines[4].ends_with("(Channel :x:)"));

    Ok(())
}

/// Tests that running the sync twice without catalog changes is idempotent.
///
/// Expected: second run creates nothing and marks every machine provisioned
#[tokio::test]
async fn second_sync_is_idempotent() -> Result<(), AppError> {
    let catalog = catalog_with(&["Alpha", "Bravo"]);
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);
    let service = ChannelSyncService::new(&catalog, &platform, &categories);

    service.sync_upcoming().await?;
    assert_eq!(platform.created_channels().len(), 2);

    let second = service.sync_upcoming().await?;

    assert_eq!(platform.created_channels().len(), 2);
    assert!(!second.contains(":x:"));
    assert_eq!(second.matches(":white_check_mark:").count(), 2);
    assert_eq!(platform.find_category_calls(), 1);

    Ok(())
}

/// Tests that duplicate names within one catalog response yield a single channel.
///
/// Expected: one creation for "Echo" and "echo"
#[tokio::test]
async fn duplicate_names_create_one_channel() -> Result<(), AppError> {
    let catalog = catalog_with(&["Echo", "echo"]);
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    assert_eq!(platform.created_names(), vec!["Echo"]);

    Ok(())
}

/// Tests that platform notes are posted into the new channel.
///
/// Expected: one message with the info status in the created channel
#[tokio::test]
async fn posts_info_status_in_new_channel() -> Result<(), AppError> {
    let record = MachineRecord::from_json(
        &MachineJsonBuilder::new("Notes")
            .os("Linux")
            .info_status("Release postponed by one week")
            .build(),
    )?;
    let catalog = FakeCatalog {
        upcoming: vec![record],
        ..Default::default()
    };
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    let created = platform.created_channels();
    assert_eq!(
        platform.messages(),
        vec![(
            ChannelRef::new(created[0].channel_id),
            "Release postponed by one week".to_string()
        )]
    );

    Ok(())
}

/// Tests that machines without notes produce no follow-up message.
///
/// Expected: channel created, no messages sent
#[tokio::test]
async fn no_message_without_info_status() -> Result<(), AppError> {
    let catalog = catalog_with(&["Quiet"]);
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    ChannelSyncService::new(&catalog, &platform, &categories)
        .sync()
        .await?;

    assert_eq!(platform.created_names(), vec!["Quiet"]);
    assert!(platform.messages().is_empty());

    Ok(())
}

/// Tests that a missing category fails the sync without creating channels.
///
/// Expected: Err(CategoryNotFound)
#[tokio::test]
async fn missing_category_fails() {
    let catalog = catalog_with(&["Zipper"]);
    let platform = FakePlatform::new();
    let categories = CategoryCache::new(CATEGORY);

    let result = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync_upcoming()
        .await;

    assert!(matches!(result, Err(AppError::CategoryNotFound(_))));
    assert!(platform.created_channels().is_empty());
}

/// Tests that catalog errors propagate unchanged.
///
/// Expected: Err(CatalogErr(MissingField("data")))
#[tokio::test]
async fn catalog_error_propagates() {
    let catalog = FakeCatalog {
        missing_field: Some("data".to_string()),
        ..Default::default()
    };
    let platform = platform();
    let categories = CategoryCache::new(CATEGORY);

    let result = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync_upcoming()
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::MissingField(ref field))) if field == "data"
    ));
}

/// Tests partial application when channel creation fails midway.
///
/// Expected: Err, with the channels before the failure kept and later ones never attempted
#[tokio::test]
async fn failure_midway_keeps_earlier_channels() {
    let catalog = catalog_with(&["One", "Two", "Three", "Four", "Five"]);
    let platform = platform().failing_create_after(2);
    let categories = CategoryCache::new(CATEGORY);

    let result = ChannelSyncService::new(&catalog, &platform, &categories)
        .sync_upcoming()
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert_eq!(platform.created_names(), vec!["One", "Two"]);
}
