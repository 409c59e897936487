use super::*;

/// Tests creating the lifecycle row for a freshly announced event.
///
/// Expected: row in `announced` state with the message ID and no channel or
/// role references yet.
#[tokio::test]
async fn creates_row_in_announced_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CtfEventRepository::new(db);
    let row = repo.create_announced(&sample_event(2402), 999_001).await?;

    assert_eq!(row.event_id, "2402");
    assert_eq!(row.title, "Sample CTF 2402");
    assert_eq!(row.state, LifecycleState::Announced.as_str());
    assert_eq!(row.message_id, "999001");
    assert!(row.channel_id.is_none());
    assert!(row.role_id.is_none());

    Ok(())
}

/// Tests the announcement idempotency guard.
///
/// Expected: `is_announced` turns true once the row exists, so the announce
/// tick skips without writing a second row.
#[tokio::test]
async fn existing_row_marks_event_announced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CtfEventRepository::new(db);
    assert!(!repo.is_announced("2402").await?);

    repo.create_announced(&sample_event(2402), 999_001).await?;

    assert!(repo.is_announced("2402").await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
