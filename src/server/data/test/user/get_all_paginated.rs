use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested subset of users along with the
/// total number of users.
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    for i in 1..=5 {
        repo.upsert(param(100000000 + i, &format!("User{}", i), None))
            .await?;
    }

    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests pagination with an empty table.
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests users are ordered alphabetically by name regardless of creation order.
#[tokio::test]
async fn orders_users_by_name() -> Result<(), AppError> {
    let test = users_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(333333333, "Zoe", None)).await?;
    repo.upsert(param(111111111, "Alice", None)).await?;
    repo.upsert(param(222222222, "Bob", None)).await?;

    let (users, _) = repo.get_all_paginated(0, 10).await?;
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Zoe"]);

    Ok(())
}
