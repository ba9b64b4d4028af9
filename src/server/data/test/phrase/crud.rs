use super::*;

/// Tests creating, updating and deleting a phrase.
///
/// Expected: Ok at every step with the stored values following the calls
#[tokio::test]
async fn create_update_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Phrase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PhraseRepository::new(db);
    let phrase = repo
        .create(PhraseParam::new("Hello there", Some("Kenobi".to_string())))
        .await?;
    assert_eq!(phrase.source.as_deref(), Some("Kenobi"));

    let updated = repo
        .update(&phrase.id, PhraseParam::new("General", None))
        .await?
        .unwrap();
    assert_eq!(updated.content, "General");
    assert_eq!(updated.source, None);

    assert!(repo.delete(&phrase.id).await?);
    assert!(repo.find_by_id(&phrase.id).await?.is_none());
    assert!(!repo.delete(&phrase.id).await?);

    Ok(())
}

/// Tests updating a missing phrase.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Phrase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PhraseRepository::new(db);
    let result = repo
        .update("000000000000000000000", PhraseParam::new("x", None))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests paginating phrases.
///
/// Expected: Ok with the page size honoured and the full total
#[tokio::test]
async fn paginates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Phrase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_phrase(db).await?;
    }

    let repo = PhraseRepository::new(db);
    let (phrases, total) = repo.get_paginated(1, 3).await?;

    assert_eq!(total, 5);
    assert_eq!(phrases.len(), 2);

    Ok(())
}
