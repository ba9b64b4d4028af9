//! Phrase data repository.

use chrono::Utc;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};

use crate::server::{
    error::AppError,
    model::phrase::{Phrase, PhraseParam},
    util::nanoid,
};

pub struct PhraseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhraseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: PhraseParam) -> Result<Phrase, AppError> {
        let entity = entity::phrase::ActiveModel {
            id: ActiveValue::Set(nanoid::generate()),
            content: ActiveValue::Set(param.content),
            source: ActiveValue::Set(param.source),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Phrase::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Phrase>, AppError> {
        let entity = entity::prelude::Phrase::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Phrase::from_entity))
    }

    /// Replaces content and source of a phrase.
    ///
    /// # Returns
    /// - `Ok(Some(Phrase))` - Updated phrase
    /// - `Ok(None)` - No phrase with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: &str, param: PhraseParam) -> Result<Option<Phrase>, AppError> {
        let Some(existing) = entity::prelude::Phrase::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::phrase::ActiveModel = existing.into();
        active.content = ActiveValue::Set(param.content);
        active.source = ActiveValue::Set(param.source);
        let entity = active.update(self.db).await?;

        Ok(Some(Phrase::from_entity(entity)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Phrase::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets phrases newest first with pagination.
    ///
    /// # Returns
    /// - `Ok((phrases, total))` - Phrases for the page and the total number of phrases
    /// - `Err(AppError)` - Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Phrase>, u64), AppError> {
        let paginator = entity::prelude::Phrase::find()
            .order_by_desc(entity::phrase::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let phrases = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Phrase::from_entity)
            .collect();

        Ok((phrases, total))
    }

    /// Picks a uniformly random phrase.
    ///
    /// # Returns
    /// - `Ok(Some(Phrase))` - A random phrase
    /// - `Ok(None)` - No phrases are stored
    /// - `Err(AppError)` - Database error
    pub async fn random(&self) -> Result<Option<Phrase>, AppError> {
        let count = entity::prelude::Phrase::find().count(self.db).await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rand::rng().random_range(0..count);
        let entity = entity::prelude::Phrase::find()
            .order_by_asc(entity::phrase::Column::Id)
            .offset(offset)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(entity.map(Phrase::from_entity))
    }
}
