use super::*;

/// Tests the per-user and per-category counters.
///
/// Expected: counts scoped to the user, the category, and the first-blood
/// flag respectively.
#[tokio::test]
async fn counts_are_scoped() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SolvedChallengeFactory::new(db, "100").category("web").build().await?;
    SolvedChallengeFactory::new(db, "100")
        .category("web")
        .first_blood(true)
        .build()
        .await?;
    SolvedChallengeFactory::new(db, "100").category("pwn").build().await?;
    SolvedChallengeFactory::new(db, "200").category("web").build().await?;

    let repo = SolveRepository::new(db);
    assert_eq!(repo.count_by_user("100").await?, 3);
    assert_eq!(
        repo.count_by_user_in_category("100", Category::Web).await?,
        2
    );
    assert_eq!(
        repo.count_by_user_in_category("100", Category::Crypto).await?,
        0
    );
    assert_eq!(repo.count_first_bloods_by_user("100").await?, 1);
    assert_eq!(repo.count_first_bloods_by_user("200").await?, 0);

    Ok(())
}

/// Tests the distinct solved-category listing.
///
/// Expected: each category once, sorted, regardless of solver.
#[tokio::test]
async fn lists_distinct_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SolvedChallengeFactory::new(db, "100").category("web").build().await?;
    SolvedChallengeFactory::new(db, "100").category("web").build().await?;
    SolvedChallengeFactory::new(db, "200").category("crypto").build().await?;

    let categories = SolveRepository::new(db).solved_categories().await?;
    assert_eq!(categories, vec!["crypto".to_string(), "web".to_string()]);

    Ok(())
}
