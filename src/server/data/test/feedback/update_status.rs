use super::*;

/// Tests moving a ticket from its current status.
///
/// Expected: Ok(true) with the new status stored
#[tokio::test]
async fn updates_from_current_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::create_feedback(db, "42").await?;

    let repo = FeedbackRepository::new(db);
    let updated = repo
        .update_status(
            &feedback.id,
            FeedbackStatus::Open,
            FeedbackStatus::Acknowledged,
        )
        .await?;

    assert!(updated);
    let stored = repo.find_by_id(&feedback.id).await?.unwrap();
    assert_eq!(stored.status, FeedbackStatus::Acknowledged);
    assert!(stored.updated_at >= stored.created_at);

    Ok(())
}

/// Tests that the update is skipped when the stored status no longer matches.
///
/// Expected: Ok(false) with the status untouched
#[tokio::test]
async fn skips_stale_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::feedback::FeedbackFactory::new(db, "42")
        .status("CLOSED")
        .build()
        .await?;

    let repo = FeedbackRepository::new(db);
    let updated = repo
        .update_status(
            &feedback.id,
            FeedbackStatus::Open,
            FeedbackStatus::Acknowledged,
        )
        .await?;

    assert!(!updated);
    let stored = repo.find_by_id(&feedback.id).await?.unwrap();
    assert_eq!(stored.status, FeedbackStatus::Closed);

    Ok(())
}
