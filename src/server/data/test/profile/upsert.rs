use super::*;

/// Tests creating a profile for a user without one.
///
/// Expected: Ok with a fresh nanoid and the given fields
#[tokio::test]
async fn creates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let profile = repo
        .upsert(UpsertProfileParam::new(42, "Wren", Some("Hi".to_string())))
        .await?;

    assert!(crate::server::util::nanoid::is_valid(&profile.id));
    assert_eq!(profile.nickname, "Wren");
    assert_eq!(profile.bio.as_deref(), Some("Hi"));
    assert!(profile.socials.is_empty());

    Ok(())
}

/// Tests that a second upsert updates the existing profile in place.
///
/// Expected: Ok with the same ID and socials, new nickname and cleared bio
#[tokio::test]
async fn updates_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::profile::ProfileFactory::new(db, "42")
        .bio(Some("Old bio".to_string()))
        .build()
        .await?;
    factory::create_social(db, &existing.id).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .upsert(UpsertProfileParam::new(42, "Renamed", None))
        .await?;

    assert_eq!(profile.id, existing.id);
    assert_eq!(profile.nickname, "Renamed");
    assert_eq!(profile.bio, None);
    assert_eq!(profile.socials.len(), 1);
    assert!(profile.updated_at >= existing.updated_at);

    Ok(())
}
