use super::*;

/// Tests finding an existing user by Discord ID.
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("Found")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(123456789).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().name, "Found");

    Ok(())
}

/// Tests looking up a Discord ID that has never logged in.
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(987654321).await?;

    assert!(user.is_none());

    Ok(())
}
