use super::*;

/// Tests filing a new ticket.
///
/// Expected: Ok with status OPEN and a valid nanoid
#[tokio::test]
async fn creates_open_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .create(CreateFeedbackParam::new(42, "Bug", "It broke"))
        .await?;

    assert_eq!(feedback.status, FeedbackStatus::Open);
    assert_eq!(feedback.discord_id, 42);
    assert!(crate::server::util::nanoid::is_valid(&feedback.id));

    let stored = repo.find_by_id(&feedback.id).await?.unwrap();
    assert_eq!(stored.title, "Bug");
    assert_eq!(stored.content, "It broke");

    Ok(())
}
