use super::*;

/// Tests the full scoring reset.
///
/// Expected: users, solves, claims, and participation all cleared.
#[tokio::test]
async fn clears_all_scoring_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scoring = ScoringService::new(db);
    scoring
        .record_solve("100", "task1", Category::Web, Difficulty::Easy, false)
        .await?;
    ActiveChallengeRepository::new(db)
        .create("100", "task2", Category::Pwn, 555_001)
        .await?;
    ParticipationRepository::new(db).record("100", "2402").await?;

    scoring.reset_all().await?;

    assert!(UserRepository::new(db).find("100").await?.is_none());
    assert_eq!(SolveRepository::new(db).count_by_user("100").await?, 0);
    assert!(ActiveChallengeRepository::new(db).list_all().await?.is_empty());
    assert!(ParticipationRepository::new(db)
        .events_for_user("100")
        .await?
        .is_empty());

    Ok(())
}
