use super::*;

/// Tests admin check on a fresh database.
#[tokio::test]
async fn false_without_admins() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin check once an admin exists.
#[tokio::test]
async fn true_with_admin() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}
