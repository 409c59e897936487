use super::*;

/// Tests the solve/revoke round trip from the scoring scenario: an easy
/// solve, then a hard first blood, then revoking the first blood.
///
/// Expected: 10 points after the first solve, 70 and one first blood after
/// the second, back to exactly 10 and zero after the revoke.
#[tokio::test]
async fn revoke_restores_ledger_exactly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scoring = ScoringService::new(db);
    scoring
        .record_solve("100", "task1", Category::Misc, Difficulty::Easy, false)
        .await?;
    let outcome = scoring
        .record_solve("100", "task2", Category::Pwn, Difficulty::Hard, true)
        .await?;
    assert_eq!(outcome.total_points, 70);
    assert_eq!(outcome.total_first_bloods, 1);

    scoring.revoke_solve("100", "task2").await?;

    let user = UserRepository::new(db).find("100").await?.unwrap();
    assert_eq!(user.points, 10);
    assert_eq!(user.first_bloods, 0);
    assert!(SolveRepository::new(db).find("100", "task2").await?.is_none());
    assert!(SolveRepository::new(db).find("100", "task1").await?.is_some());

    Ok(())
}

/// Tests revoking a solve that was never recorded.
///
/// Expected: NotFound with a user-facing message.
#[tokio::test]
async fn unknown_solve_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ScoringService::new(db)
        .revoke_solve("100", "ghost")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(err.user_message().unwrap().contains("ghost"));

    Ok(())
}

/// Tests the zero floor on an inconsistent ledger.
///
/// Expected: revoking a solve worth more than the stored totals floors
/// points and first bloods at zero instead of going negative.
#[tokio::test]
async fn ledger_floors_at_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).user_id("100").points(5).build().await?;
    SolvedChallengeFactory::new(db, "100")
        .challenge_name("heapmaster")
        .category("pwn")
        .difficulty("hard")
        .first_blood(true)
        .build()
        .await?;

    ScoringService::new(db).revoke_solve("100", "heapmaster").await?;

    let user = UserRepository::new(db).find("100").await?.unwrap();
    assert_eq!(user.points, 0);
    assert_eq!(user.first_bloods, 0);

    Ok(())
}
