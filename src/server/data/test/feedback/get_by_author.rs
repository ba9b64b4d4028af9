use super::*;
use chrono::{Duration, Utc};

/// Tests listing an author's tickets newest first with a limit.
///
/// Expected: Ok with the two newest tickets of the author only
#[tokio::test]
async fn lists_newest_first_with_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feedback)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (hours, title) in [(3, "oldest"), (2, "middle"), (1, "newest")] {
        factory::feedback::FeedbackFactory::new(db, "42")
            .title(title)
            .created_at(now - Duration::hours(hours))
            .build()
            .await?;
    }
    factory::create_feedback(db, "43").await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo.get_by_author(42, Some(2)).await?;

    let titles: Vec<_> = feedback.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle"]);

    assert_eq!(repo.get_by_author(42, None).await?.len(), 3);

    Ok(())
}
