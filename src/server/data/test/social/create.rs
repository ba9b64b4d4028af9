use super::*;

/// Tests adding a social link to a profile.
///
/// Expected: Ok with the link stored and counted
#[tokio::test]
async fn creates_social() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;

    let repo = SocialRepository::new(db);
    let social = repo
        .create(CreateSocialParam::new(
            profile.id.clone(),
            "GitHub",
            "https://github.com/wren",
        ))
        .await?;

    assert_eq!(social.profile_id, profile.id);
    assert_eq!(social.platform, "GitHub");
    assert_eq!(repo.count_by_profile_id(&profile.id).await?, 1);
    assert_eq!(repo.get_by_profile_id(&profile.id).await?[0].id, social.id);

    Ok(())
}

/// Tests that the unique index rejects the exact same platform twice.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_platform() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;
    factory::social::SocialFactory::new(db, &profile.id)
        .platform("GitHub")
        .build()
        .await?;

    let repo = SocialRepository::new(db);
    let result = repo
        .create(CreateSocialParam::new(
            profile.id.clone(),
            "GitHub",
            "https://github.com/other",
        ))
        .await;

    assert!(result.is_err());

    Ok(())
}
