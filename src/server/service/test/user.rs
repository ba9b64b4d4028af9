use crate::server::{error::AppError, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

/// Tests granting admin to an existing user.
///
/// Expected: Ok with the user listed among admins
#[tokio::test]
async fn adds_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let discord_id = user.discord_id.parse::<u64>().unwrap();

    let service = UserService::new(db);
    service.add_admin(discord_id).await?;

    let admins = service.get_all_admins().await?;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].discord_id, discord_id);

    Ok(())
}

/// Tests granting admin to a user who never logged in.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn add_admin_fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).add_admin(123456789).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests revoking admin.
///
/// Expected: Ok with no admins left
#[tokio::test]
async fn removes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let discord_id = admin.discord_id.parse::<u64>().unwrap();

    let service = UserService::new(db);
    service.remove_admin(discord_id).await?;

    assert!(service.get_all_admins().await?.is_empty());

    Ok(())
}

/// Tests pagination metadata of the user listing.
///
/// Expected: 5 users at 2 per page give 3 pages
#[tokio::test]
async fn computes_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let page = UserService::new(db).get_all_users(2, 2).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.users.len(), 1);

    Ok(())
}
