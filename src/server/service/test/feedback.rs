use crate::{
    model::feedback::FeedbackStatus,
    server::{
        error::AppError, model::feedback::CreateFeedbackParam,
        service::feedback::FeedbackService,
    },
};
use test_utils::{builder::TestBuilder, factory};

/// Tests submitting a ticket.
///
/// Expected: Ok with an OPEN ticket
#[tokio::test]
async fn submits_open_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = FeedbackService::new(db)
        .submit(CreateFeedbackParam::new(42, "Bug", "The bot fell over"))
        .await?;

    assert_eq!(feedback.status, FeedbackStatus::Open);
    assert_eq!(feedback.discord_id, 42);

    Ok(())
}

/// Tests submitting a ticket with an empty title.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_empty_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(db);
    let result = service
        .submit(CreateFeedbackParam::new(42, "   ", "Content"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all_by_author(42).await?.is_empty());

    Ok(())
}

/// Tests an allowed transition.
///
/// Expected: Ok with the new status
#[tokio::test]
async fn applies_allowed_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::feedback::FeedbackFactory::new(db, "42")
        .status("ACKNOWLEDGED")
        .build()
        .await?;

    let updated = FeedbackService::new(db)
        .update_status(&feedback.id, FeedbackStatus::Accepted)
        .await?;

    assert_eq!(updated.status, FeedbackStatus::Accepted);

    Ok(())
}

/// Tests a transition the status table does not allow.
///
/// Expected: Err(Conflict) and the stored status unchanged
#[tokio::test]
async fn rejects_invalid_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::create_feedback(db, "42").await?;

    let service = FeedbackService::new(db);
    let result = service
        .update_status(&feedback.id, FeedbackStatus::Resolved)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get(&feedback.id).await?.status, FeedbackStatus::Open);

    Ok(())
}

/// Tests transitioning a ticket to its current status.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_transition_to_same_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::create_feedback(db, "42").await?;

    let result = FeedbackService::new(db)
        .update_status(&feedback.id, FeedbackStatus::Open)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that terminal tickets can not move.
///
/// Expected: Err(Conflict) for every status
#[tokio::test]
async fn terminal_ticket_is_frozen() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::feedback::FeedbackFactory::new(db, "42")
        .status("REJECTED")
        .build()
        .await?;

    let service = FeedbackService::new(db);
    for status in FeedbackStatus::ALL {
        let result = service.update_status(&feedback.id, status).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    Ok(())
}

/// Tests viewing another user's ticket.
///
/// Expected: NotFound for a stranger, Ok for the author and for an owner
#[tokio::test]
async fn only_author_or_owner_can_view() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = factory::create_feedback(db, "42").await?;
    let service = FeedbackService::new(db);

    let stranger = service.get_for_viewer(&feedback.id, 7, false).await;
    assert!(matches!(stranger, Err(AppError::NotFound(_))));

    assert!(service.get_for_viewer(&feedback.id, 42, false).await.is_ok());
    assert!(service.get_for_viewer(&feedback.id, 7, true).await.is_ok());

    Ok(())
}

/// Tests deleting with a malformed ID.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn delete_rejects_malformed_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FeedbackService::new(db).delete("not-an-id").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a well formed ID that does not exist, then an existing ticket.
///
/// Expected: Err(NotFound) then Ok
#[tokio::test]
async fn delete_by_valid_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(db);
    let missing = service.delete("V1StGXR8_Z5jdHi6B-myT").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let feedback = factory::create_feedback(db, "42").await?;
    service.delete(&feedback.id).await?;

    assert!(matches!(
        service.get(&feedback.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the recent ticket listing limit.
///
/// Expected: at most ten tickets
#[tokio::test]
async fn recent_tickets_are_limited() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        factory::create_feedback(db, "42").await?;
    }

    let recent = FeedbackService::new(db).get_recent_by_author(42).await?;

    assert_eq!(recent.len(), 10);

    Ok(())
}
