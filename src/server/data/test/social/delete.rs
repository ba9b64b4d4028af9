use super::*;

/// Tests removing a social link from its profile.
///
/// Expected: Ok(true) and the link is gone
#[tokio::test]
async fn deletes_social() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;
    let social = factory::create_social(db, &profile.id).await?;

    let repo = SocialRepository::new(db);

    assert!(repo.delete(&profile.id, &social.id).await?);
    assert_eq!(repo.count_by_profile_id(&profile.id).await?, 0);

    Ok(())
}

/// Tests that a link cannot be deleted through another profile.
///
/// Expected: Ok(false) and the link remains
#[tokio::test]
async fn ignores_link_of_other_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_profile(db, "1").await?;
    let other = factory::create_profile(db, "2").await?;
    let social = factory::create_social(db, &owner.id).await?;

    let repo = SocialRepository::new(db);

    assert!(!repo.delete(&other.id, &social.id).await?);
    assert_eq!(repo.count_by_profile_id(&owner.id).await?, 1);

    Ok(())
}
