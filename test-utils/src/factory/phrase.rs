//! Phrase factory.

use crate::factory::helpers::{next_id, next_nanoid};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PhraseFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    content: String,
    source: Option<String>,
}

impl<'a> PhraseFactory<'a> {
    /// Defaults:
    /// - content: `"Phrase {id}"`
    /// - source: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_nanoid(),
            content: format!("Phrase {}", next_id()),
            source: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub async fn build(self) -> Result<entity::phrase::Model, DbErr> {
        entity::phrase::ActiveModel {
            id: ActiveValue::Set(self.id),
            content: ActiveValue::Set(self.content),
            source: ActiveValue::Set(self.source),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_phrase(db: &DatabaseConnection) -> Result<entity::phrase::Model, DbErr> {
    PhraseFactory::new(db).build().await
}
