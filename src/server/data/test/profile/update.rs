use super::*;

/// Tests updating nickname and bio by profile ID.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_profile(db, "42").await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .update(&existing.id, "New".to_string(), Some("Bio".to_string()))
        .await?
        .unwrap();

    assert_eq!(profile.nickname, "New");
    assert_eq!(profile.bio.as_deref(), Some("Bio"));

    Ok(())
}

/// Tests updating a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let result = repo
        .update("000000000000000000000", "New".to_string(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
