//! Social link factory.

use crate::factory::helpers::{next_id, next_nanoid};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating social links on an existing profile.
pub struct SocialFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    profile_id: String,
    platform: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl<'a> SocialFactory<'a> {
    /// Defaults:
    /// - platform: `"Platform {id}"`
    /// - url: `"https://example.com/{id}"`
    pub fn new(db: &'a DatabaseConnection, profile_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_nanoid(),
            profile_id: profile_id.into(),
            platform: format!("Platform {}", n),
            url: format!("https://example.com/{}", n),
            created_at: Utc::now(),
        }
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::social::Model, DbErr> {
        entity::social::ActiveModel {
            id: ActiveValue::Set(self.id),
            profile_id: ActiveValue::Set(self.profile_id),
            platform: ActiveValue::Set(self.platform),
            url: ActiveValue::Set(self.url),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a social link with default values on `profile_id`.
pub async fn create_social(
    db: &DatabaseConnection,
    profile_id: impl Into<String>,
) -> Result<entity::social::Model, DbErr> {
    SocialFactory::new(db, profile_id).build().await
}
