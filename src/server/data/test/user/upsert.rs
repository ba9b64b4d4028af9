use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates a user record with the specified
/// Discord ID and name, defaulting admin to false.
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param(123456789, "TestUser", None)).await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert!(!user.admin);

    Ok(())
}

/// Tests creating a new user with admin status.
#[tokio::test]
async fn creates_new_admin_user() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param(123456789, "AdminUser", Some(true))).await?;

    assert!(user.admin);

    Ok(())
}

/// Tests updating an existing user's name without affecting admin status.
///
/// Verifies that when upserting with is_admin as None, the name is updated but the
/// admin status is preserved from the original record.
#[tokio::test]
async fn updates_name_preserves_admin() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(123456789, "OriginalName", Some(true)))
        .await?;
    let user = repo.upsert(param(123456789, "UpdatedName", None)).await?;

    assert_eq!(user.name, "UpdatedName");
    assert!(user.admin);

    Ok(())
}

/// Tests revoking admin status through an explicit upsert.
#[tokio::test]
async fn explicit_admin_flag_overrides() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(123456789, "User", Some(true))).await?;
    let user = repo.upsert(param(123456789, "User", Some(false))).await?;

    assert!(!user.admin);

    Ok(())
}
