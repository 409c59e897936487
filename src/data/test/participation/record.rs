use super::*;

/// Tests recording event participation.
///
/// Expected: the (user, event) pair is stored and listed for the user.
#[tokio::test]
async fn records_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipationRepository::new(db);
    repo.record("100", "2402").await?;
    repo.record("100", "2401").await?;

    let events = repo.events_for_user("100").await?;
    assert_eq!(events, vec!["2401".to_string(), "2402".to_string()]);

    Ok(())
}

/// Tests that re-reacting does not duplicate or fail.
///
/// Expected: recording the same pair twice is a silent no-op.
#[tokio::test]
async fn repeated_record_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipationRepository::new(db);
    repo.record("100", "2402").await?;
    repo.record("100", "2402").await?;

    assert_eq!(repo.events_for_user("100").await?.len(), 1);

    Ok(())
}
