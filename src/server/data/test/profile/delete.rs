use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a profile by a valid existing ID.
///
/// Verifies that the profile and its socials are removed.
///
/// Expected: Ok(true) and no rows left in either table
#[tokio::test]
async fn deletes_profile_and_socials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db, "42").await?;
    factory::create_social(db, &profile.id).await?;
    factory::create_social(db, &profile.id).await?;

    let repo = ProfileRepository::new(db);
    assert!(repo.delete(&profile.id).await?);

    assert_eq!(entity::prelude::Profile::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Social::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a well formed ID that matches nothing.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    assert!(!repo.delete("000000000000000000000").await?);

    Ok(())
}

/// Tests that deleting one profile leaves other profiles' socials alone.
///
/// Expected: Ok(true) with the other profile's social intact
#[tokio::test]
async fn keeps_other_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_profile(db, "1").await?;
    let kept = factory::create_profile(db, "2").await?;
    factory::create_social(db, &doomed.id).await?;
    factory::create_social(db, &kept.id).await?;

    let repo = ProfileRepository::new(db);
    repo.delete(&doomed.id).await?;

    let remaining = repo.find_by_id(&kept.id).await?.unwrap();
    assert_eq!(remaining.socials.len(), 1);

    Ok(())
}
