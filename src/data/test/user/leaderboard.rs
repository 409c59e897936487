use super::*;

/// Tests leaderboard ordering.
///
/// Expected: rows ordered by points descending, with equal points broken by
/// ascending user ID so repeated reads render identically.
#[tokio::test]
async fn orders_by_points_then_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).user_id("300").points(25).build().await?;
    UserFactory::new(db).user_id("100").points(40).build().await?;
    UserFactory::new(db).user_id("200").points(40).build().await?;

    let entries = UserRepository::new(db).leaderboard(10).await?;

    let ids: Vec<&str> = entries.iter().map(|e| e.user_id.as_str()).collect();
    assert_eq!(ids, vec!["100", "200", "300"]);
    assert!(entries.windows(2).all(|w| w[0].points >= w[1].points));

    Ok(())
}

/// Tests the row limit.
///
/// Expected: at most `limit` rows even when more users exist.
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for points in [10, 20, 30, 40, 50] {
        UserFactory::new(db).points(points).build().await?;
    }

    let entries = UserRepository::new(db).leaderboard(3).await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].points, 50);

    Ok(())
}

/// Tests that each row carries the user's solve count.
///
/// Expected: solve counts come from solved_challenge rows, not the ledger.
#[tokio::test]
async fn joins_solve_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).points(20).build().await?;
    SolvedChallengeFactory::new(db, &user.user_id).build().await?;
    SolvedChallengeFactory::new(db, &user.user_id).build().await?;

    let entries = UserRepository::new(db).leaderboard(10).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].solves, 2);

    Ok(())
}
