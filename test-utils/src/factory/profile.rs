//! Profile factory for creating test profile entities.

use crate::factory::helpers::{next_id, next_nanoid};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles.
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileFactory::new(&db, "123456789")
///     .nickname("Wren")
///     .bio(Some("Hello".to_string()))
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    discord_id: String,
    nickname: String,
    bio: Option<String>,
}

impl<'a> ProfileFactory<'a> {
    /// Defaults:
    /// - id: unique nanoid-shaped string
    /// - nickname: `"Nickname {id}"`
    /// - bio: `None`
    pub fn new(db: &'a DatabaseConnection, discord_id: impl Into<String>) -> Self {
        Self {
            db,
            id: next_nanoid(),
            discord_id: discord_id.into(),
            nickname: format!("Nickname {}", next_id()),
            bio: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();
        entity::profile::ActiveModel {
            id: ActiveValue::Set(self.id),
            discord_id: ActiveValue::Set(self.discord_id),
            nickname: ActiveValue::Set(self.nickname),
            bio: ActiveValue::Set(self.bio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile for `discord_id` with default values.
pub async fn create_profile(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, discord_id).build().await
}
