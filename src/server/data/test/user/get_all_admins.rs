use super::*;

/// Tests that only admins are returned, sorted by name.
#[tokio::test]
async fn returns_only_admins() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(1, "Zed", Some(true))).await?;
    repo.upsert(param(2, "Regular", None)).await?;
    repo.upsert(param(3, "Amy", Some(true))).await?;

    let admins = repo.get_all_admins().await?;

    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].name, "Amy");
    assert_eq!(admins[1].name, "Zed");
    assert!(admins.iter().all(|u| u.admin));

    Ok(())
}
