use super::*;

/// Tests paginating profiles sorted by nickname, each with its own socials.
///
/// Expected: Ok with the first two nicknames and a total of 3
#[tokio::test]
async fn pages_profiles_with_socials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let charlie = factory::profile::ProfileFactory::new(db, "3")
        .nickname("Charlie")
        .build()
        .await?;
    let alpha = factory::profile::ProfileFactory::new(db, "1")
        .nickname("Alpha")
        .build()
        .await?;
    factory::profile::ProfileFactory::new(db, "2")
        .nickname("Bravo")
        .build()
        .await?;
    factory::create_social(db, &alpha.id).await?;
    factory::create_social(db, &charlie.id).await?;

    let repo = ProfileRepository::new(db);
    let (profiles, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].nickname, "Alpha");
    assert_eq!(profiles[0].socials.len(), 1);
    assert_eq!(profiles[1].nickname, "Bravo");
    assert!(profiles[1].socials.is_empty());

    Ok(())
}
