use crate::server::{
    error::AppError, model::profile::UpsertProfileParam, service::profile::ProfileService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a profile through the service.
///
/// Expected: Ok with the trimmed nickname stored
#[tokio::test]
async fn upserts_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProfileService::new(db);
    let profile = service
        .upsert(UpsertProfileParam::new(42, "  Wren  ", None))
        .await?;

    assert_eq!(profile.nickname, "Wren");
    assert!(service.get_by_discord_id(42).await?.is_some());

    Ok(())
}

/// Tests a nickname longer than 32 characters.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_long_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileService::new(db)
        .upsert(UpsertProfileParam::new(42, &"x".repeat(33), None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests adding a social link for a platform the profile already links.
///
/// Expected: Err(Conflict) regardless of letter case
#[tokio::test]
async fn rejects_duplicate_platform() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_profile(db, "42").await?;
    let service = ProfileService::new(db);

    service
        .add_own_social(42, "GitHub", "https://github.com/wren")
        .await?;
    let result = service
        .add_own_social(42, "github", "https://github.com/other")
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the social link limit.
///
/// Expected: the eleventh link fails with BadRequest
#[tokio::test]
async fn limits_social_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;
    for i in 0..10 {
        factory::social::SocialFactory::new(db, &profile.id)
            .platform(format!("platform{}", i))
            .build()
            .await?;
    }

    let result = ProfileService::new(db)
        .add_social(&profile.id, "mastodon", "https://mastodon.social/@wren")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests adding a social link without having a profile.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn add_social_requires_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileService::new(db)
        .add_own_social(42, "github", "https://github.com/wren")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests adding a link with a non-http URL.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_http_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_profile(db, "42").await?;

    let result = ProfileService::new(db)
        .add_own_social(42, "ftp", "ftp://example.com")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests removing a link by platform name.
///
/// Expected: Ok with the removed link, profile left without socials
#[tokio::test]
async fn removes_own_social_by_platform() -> Result<(), AppError> {
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

    let service = ProfileService::new(db);
    let removed = service.remove_own_social(42, "github").await?;

    assert_eq!(removed.platform, "GitHub");
    assert!(service.get_by_id(&profile.id).await?.socials.is_empty());

    Ok(())
}

/// Tests deleting a profile by a malformed ID.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn delete_rejects_malformed_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileService::new(db).delete("short").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting an existing profile by its nanoid.
///
/// Expected: Ok and the profile is gone
#[tokio::test]
async fn deletes_profile_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;
    let service = ProfileService::new(db);

    service.delete(&profile.id).await?;

    assert!(matches!(
        service.get_by_id(&profile.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting the caller's profile when they have none.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_own_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileService::new(db).delete_own(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
