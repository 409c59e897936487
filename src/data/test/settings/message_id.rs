use super::*;

/// Tests storing and reading back a singleton message ID.
///
/// Expected: absent before the first set, then the stored value; a second
/// set overwrites.
#[tokio::test]
async fn round_trips_and_overwrites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotConfigRepository::new(db);
    assert_eq!(repo.get_message_id(SCOREBOARD_MESSAGE_ID).await?, None);

    repo.set_message_id(SCOREBOARD_MESSAGE_ID, 111).await?;
    assert_eq!(repo.get_message_id(SCOREBOARD_MESSAGE_ID).await?, Some(111));

    repo.set_message_id(SCOREBOARD_MESSAGE_ID, 222).await?;
    assert_eq!(repo.get_message_id(SCOREBOARD_MESSAGE_ID).await?, Some(222));

    Ok(())
}

/// Tests the unparseable-value fallback.
///
/// Expected: a stored value that is not a snowflake reads as absent, letting
/// the singleton pattern post a fresh message and overwrite it.
#[tokio::test]
async fn garbage_value_reads_as_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotConfigRepository::new(db);
    repo.set(SCOREBOARD_MESSAGE_ID, "not-a-snowflake").await?;

    assert_eq!(repo.get_message_id(SCOREBOARD_MESSAGE_ID).await?, None);

    Ok(())
}
