//! Phrases shown by `/phrase random` and rotated through the bot presence.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::phrase::PhraseRepository,
    error::AppError,
    model::phrase::{PaginatedPhrases, Phrase, PhraseParam},
    service::page_count,
    util::nanoid,
};

pub struct PhraseService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PhraseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Phrase)` - The stored phrase
    /// - `Err(AppError::BadRequest)` - Content or source out of bounds
    pub async fn create(&self, param: PhraseParam) -> Result<Phrase, AppError> {
        param.validate()?;
        PhraseRepository::new(self.db).create(param).await
    }

    /// # Returns
    /// - `Ok(Phrase)` - The updated phrase
    /// - `Err(AppError::BadRequest)` - Malformed ID or invalid fields
    /// - `Err(AppError::NotFound)` - No phrase with that ID
    pub async fn update(&self, id: &str, param: PhraseParam) -> Result<Phrase, AppError> {
        nanoid::validate(id, "phrase")?;
        param.validate()?;

        PhraseRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Phrase not found".to_string()))
    }

    /// # Returns
    /// - `Ok(())` - Phrase deleted
    /// - `Err(AppError::BadRequest)` - Malformed ID, nothing queried
    /// - `Err(AppError::NotFound)` - No phrase with that ID
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        nanoid::validate(id, "phrase")?;

        if !PhraseRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Phrase not found".to_string()));
        }

        Ok(())
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedPhrases, AppError> {
        let (phrases, total) = PhraseRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedPhrases {
            phrases,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// A uniformly random phrase, `None` when none are stored.
    pub async fn random(&self) -> Result<Option<Phrase>, AppError> {
        PhraseRepository::new(self.db).random().await
    }
}
