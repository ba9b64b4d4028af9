use super::*;

/// Tests deleting a ticket by a valid existing ID.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_existing_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::create_feedback(db, "42").await?;

    let repo = FeedbackRepository::new(db);

    assert!(repo.delete(&feedback.id).await?);
    assert!(repo.find_by_id(&feedback.id).await?.is_none());

    Ok(())
}

/// Tests deleting a well formed ID that matches nothing.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);

    assert!(!repo.delete("000000000000000000000").await?);

    Ok(())
}
