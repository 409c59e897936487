use super::*;

/// Tests recording a plain solve.
///
/// Expected: solved row written, ledger credited 10 points for an easy
/// solve, and the outcome flags the user's first solve in the category.
#[tokio::test]
async fn credits_ledger_and_writes_solve_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ScoringService::new(db)
        .record_solve("100", "task1", Category::Misc, Difficulty::Easy, false)
        .await?;

    assert_eq!(outcome.points_awarded, 10);
    assert_eq!(outcome.total_points, 10);
    assert_eq!(outcome.total_first_bloods, 0);
    assert!(outcome.first_solve_in_category);

    let user = UserRepository::new(db).find("100").await?.unwrap();
    assert_eq!(user.points, 10);
    assert_eq!(user.first_bloods, 0);
    assert!(SolveRepository::new(db).find("100", "task1").await?.is_some());

    Ok(())
}

/// Tests the duplicate-solve guard.
///
/// Expected: the second attempt fails with DuplicateSolve and neither the
/// ledger nor the solve rows change.
#[tokio::test]
async fn duplicate_solve_leaves_ledger_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scoring = ScoringService::new(db);
    scoring
        .record_solve("100", "task1", Category::Web, Difficulty::Medium, false)
        .await?;

    let err = scoring
        .record_solve("100", "task1", Category::Web, Difficulty::Medium, false)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateSolve(_)));

    let user = UserRepository::new(db).find("100").await?.unwrap();
    assert_eq!(user.points, 25);
    assert_eq!(SolveRepository::new(db).count_by_user("100").await?, 1);

    Ok(())
}

/// Tests first-blood crediting.
///
/// Expected: hard + first blood awards 60 and bumps the first-blood counter.
#[tokio::test]
async fn first_blood_awards_bonus() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ScoringService::new(db)
        .record_solve("100", "heapmaster", Category::Pwn, Difficulty::Hard, true)
        .await?;

    assert_eq!(outcome.points_awarded, 60);
    assert_eq!(outcome.total_first_bloods, 1);

    Ok(())
}

/// Tests that recording a solve consumes the matching claim.
///
/// Expected: the active challenge row is gone after the solve; other users'
/// claims on the same challenge survive.
#[tokio::test]
async fn solve_consumes_matching_claim() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = ActiveChallengeRepository::new(db);
    active.create("100", "task1", Category::Web, 555_001).await?;
    active.create("200", "task1", Category::Web, 555_002).await?;

    ScoringService::new(db)
        .record_solve("100", "task1", Category::Web, Difficulty::Easy, false)
        .await?;

    assert!(active.find("100", "task1").await?.is_none());
    assert!(active.find("200", "task1").await?.is_some());

    Ok(())
}

/// Tests the category-debut flag on later solves.
///
/// Expected: only the first solve in a category reports the debut.
#[tokio::test]
async fn category_debut_reported_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scoring = ScoringService::new(db);
    let first = scoring
        .record_solve("100", "task1", Category::Crypto, Difficulty::Easy, false)
        .await?;
    let second = scoring
        .record_solve("100", "task2", Category::Crypto, Difficulty::Easy, false)
        .await?;
    let other_category = scoring
        .record_solve("100", "task3", Category::Web, Difficulty::Easy, false)
        .await?;

    assert!(first.first_solve_in_category);
    assert!(!second.first_solve_in_category);
    assert!(other_category.first_solve_in_category);

    Ok(())
}
