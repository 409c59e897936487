use super::*;

/// Tests reaction-to-event resolution via the announcement message ID.
///
/// Expected: Some for a recorded announcement message, None otherwise.
#[tokio::test]
async fn resolves_announcement_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CtfEventFactory::new(db)
        .event_id("2402")
        .message_id("999001")
        .build()
        .await?;

    let repo = CtfEventRepository::new(db);
    let found = repo.find_by_message_id(999_001).await?;
    assert_eq!(found.map(|row| row.event_id), Some("2402".to_string()));

    assert!(repo.find_by_message_id(123).await?.is_none());

    Ok(())
}
