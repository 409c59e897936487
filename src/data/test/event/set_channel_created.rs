use super::*;

/// Tests advancing an announced event once its channel and role exist.
///
/// Expected: state becomes `channel_created` with both references recorded;
/// the announcement message ID is untouched.
#[tokio::test]
async fn records_channel_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CtfEventFactory::new(db)
        .event_id("2402")
        .state(LifecycleState::Announced.as_str())
        .message_id("999001")
        .channel_id(None)
        .role_id(None)
        .build()
        .await?;

    let repo = CtfEventRepository::new(db);
    repo.set_channel_created("2402", 8_000_001, 7_000_001).await?;

    let row = repo.find("2402").await?.unwrap();
    assert_eq!(row.state, LifecycleState::ChannelCreated.as_str());
    assert_eq!(row.channel_id.as_deref(), Some("8000001"));
    assert_eq!(row.role_id.as_deref(), Some("7000001"));
    assert_eq!(row.message_id, "999001");

    Ok(())
}
