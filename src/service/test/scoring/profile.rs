use super::*;

/// Tests profile aggregation across solves and participation.
///
/// Expected: rank, totals, per-category counts, and joined events all
/// reflect the stored rows.
#[tokio::test]
async fn aggregates_member_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scoring = ScoringService::new(db);
    scoring
        .record_solve("100", "task1", Category::Web, Difficulty::Easy, false)
        .await?;
    scoring
        .record_solve("100", "task2", Category::Web, Difficulty::Medium, true)
        .await?;
    scoring
        .record_solve("100", "task3", Category::Pwn, Difficulty::Hard, false)
        .await?;
    scoring
        .record_solve("200", "task4", Category::Misc, Difficulty::Easy, false)
        .await?;
    ParticipationRepository::new(db).record("100", "2402").await?;

    let stats = scoring.profile("100").await?;
    assert_eq!(stats.points, 10 + 40 + 40);
    assert_eq!(stats.first_bloods, 1);
    assert_eq!(stats.rank, 1);
    assert_eq!(stats.solves, 3);
    assert_eq!(stats.first_blood_solves, 1);
    assert_eq!(stats.solves_by_category.get("web"), Some(&2));
    assert_eq!(stats.solves_by_category.get("pwn"), Some(&1));
    assert_eq!(stats.solves_by_category.get("crypto"), Some(&0));
    assert_eq!(stats.participated_events, vec!["2402".to_string()]);

    Ok(())
}

/// Tests the profile of a member with no recorded data.
///
/// Expected: NotFound.
#[tokio::test]
async fn unknown_member_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ScoringService::new(db).profile("999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
