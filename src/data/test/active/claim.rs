use super::*;

/// Tests the claim lifecycle: create, look up, list, delete.
///
/// Expected: the claim is visible until deleted.
#[tokio::test]
async fn claims_are_created_and_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActiveChallengeRepository::new(db);
    let claim = repo
        .create("100", "SQL Labyrinth", Category::Web, 555_001)
        .await?;
    assert_eq!(claim.thread_id, "555001");
    assert_eq!(claim.category, "web");

    assert!(repo.find("100", "SQL Labyrinth").await?.is_some());
    assert_eq!(repo.list_all().await?.len(), 1);

    repo.delete("100", "SQL Labyrinth").await?;
    assert!(repo.find("100", "SQL Labyrinth").await?.is_none());
    assert!(repo.list_all().await?.is_empty());

    Ok(())
}

/// Tests that a claim belongs to one user.
///
/// Expected: two members may claim the same challenge independently.
#[tokio::test]
async fn claims_are_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActiveChallengeRepository::new(db);
    repo.create("100", "ropmaster", Category::Pwn, 555_001).await?;
    repo.create("200", "ropmaster", Category::Pwn, 555_002).await?;

    assert_eq!(repo.list_all().await?.len(), 2);

    repo.delete("100", "ropmaster").await?;
    assert!(repo.find("200", "ropmaster").await?.is_some());

    Ok(())
}
