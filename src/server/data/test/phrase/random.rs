use super::*;

/// Tests picking a random phrase from an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Phrase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PhraseRepository::new(db);

    assert!(repo.random().await?.is_none());

    Ok(())
}

/// Tests that random picks always come from the stored phrases.
///
/// Expected: Ok(Some) with one of the stored IDs on every draw
#[tokio::test]
async fn picks_stored_phrase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Phrase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_phrase(db).await?;
    let b = factory::create_phrase(db).await?;

    let repo = PhraseRepository::new(db);
    for _ in 0..10 {
        let picked = repo.random().await?.unwrap();
        assert!(picked.id == a.id || picked.id == b.id);
    }

    Ok(())
}
