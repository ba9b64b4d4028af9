use super::*;

/// Tests granting and then revoking admin status.
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(123456789, "User", None)).await?;

    assert!(repo.set_admin(123456789, true).await?);
    assert!(repo.find_by_discord_id(123456789).await?.unwrap().admin);

    assert!(repo.set_admin(123456789, false).await?);
    assert!(!repo.find_by_discord_id(123456789).await?.unwrap().admin);

    Ok(())
}

/// Tests setting admin status for a user that does not exist.
#[tokio::test]
async fn reports_missing_user() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.set_admin(999, true).await?);
    assert!(repo.find_by_discord_id(999).await?.is_none());

    Ok(())
}
