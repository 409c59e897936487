use super::*;

/// Tests the archival transition.
///
/// Expected: state becomes `archived` and the role reference is cleared, but
/// the channel reference stays (archived channels remain mapped forever).
#[tokio::test]
async fn clears_role_but_keeps_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = CtfEventFactory::new(db).event_id("2402").build().await?;
    assert!(row.channel_id.is_some());
    assert!(row.role_id.is_some());

    let repo = CtfEventRepository::new(db);
    repo.mark_archived("2402").await?;

    let archived = repo.find("2402").await?.unwrap();
    assert_eq!(archived.state, LifecycleState::Archived.as_str());
    assert!(archived.role_id.is_none());
    assert_eq!(archived.channel_id, row.channel_id);

    Ok(())
}

/// Tests that the archival sweep no longer sees archived events.
///
/// Expected: `all_unarchived` returns only rows still in progress.
#[tokio::test]
async fn archived_rows_leave_the_sweep() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CtfEventFactory::new(db).event_id("1001").build().await?;
    CtfEventFactory::new(db).event_id("1002").build().await?;

    let repo = CtfEventRepository::new(db);
    repo.mark_archived("1001").await?;

    let pending = repo.all_unarchived().await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].event_id, "1002");

    Ok(())
}
