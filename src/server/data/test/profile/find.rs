use super::*;
use chrono::{Duration, Utc};

/// Tests loading a profile by ID together with its socials in creation order.
///
/// Expected: Ok(Some) with both socials, oldest first
#[tokio::test]
async fn finds_profile_with_socials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let profile = factory::create_profile(db, "42").await?;
    factory::social::SocialFactory::new(db, &profile.id)
        .platform("Mastodon")
        .created_at(now)
        .build()
        .await?;
    let older = factory::social::SocialFactory::new(db, &profile.id)
        .platform("GitHub")
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let found = repo.find_by_id(&profile.id).await?.unwrap();

    assert_eq!(found.discord_id, 42);
    assert_eq!(found.socials.len(), 2);
    assert_eq!(found.socials[0].id, older.id);

    Ok(())
}

/// Tests that a well formed but unknown ID is reported as missing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    assert!(repo.find_by_id("000000000000000000000").await?.is_none());

    Ok(())
}

/// Tests loading a profile by its owner's Discord ID.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn finds_by_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;

    let repo = ProfileRepository::new(db);

    assert_eq!(repo.find_by_discord_id(42).await?.unwrap().id, profile.id);
    assert!(repo.find_by_discord_id(43).await?.is_none());

    Ok(())
}
