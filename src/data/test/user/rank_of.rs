use super::*;

/// Tests 1-based rank under the leaderboard ordering.
///
/// Expected: highest points is rank 1, ties ranked by ascending user ID.
#[tokio::test]
async fn ranks_users_by_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).user_id("100").points(70).build().await?;
    UserFactory::new(db).user_id("200").points(10).build().await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.rank_of("100").await?, Some(1));
    assert_eq!(repo.rank_of("200").await?, Some(2));

    Ok(())
}

/// Tests rank lookup for a user without a ledger row.
///
/// Expected: None rather than an error.
#[tokio::test]
async fn unknown_user_has_no_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(UserRepository::new(db).rank_of("999").await?, None);

    Ok(())
}
