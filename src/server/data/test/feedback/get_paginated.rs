use super::*;

/// Tests listing every ticket.
///
/// Expected: Ok with all tickets and their total
#[tokio::test]
async fn lists_all_tickets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_feedback(db, "42").await?;
    }

    let repo = FeedbackRepository::new(db);
    let (feedback, total) = repo.get_paginated(None, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(feedback.len(), 2);

    Ok(())
}

/// Tests filtering the listing by status.
///
/// Expected: Ok with only the ACCEPTED ticket
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_feedback(db, "42").await?;
    let accepted = factory::feedback::FeedbackFactory::new(db, "42")
        .status("ACCEPTED")
        .build()
        .await?;

    let repo = FeedbackRepository::new(db);
    let (feedback, total) = repo
        .get_paginated(Some(FeedbackStatus::Accepted), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(feedback[0].id, accepted.id);

    Ok(())
}
