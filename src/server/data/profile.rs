//! Profile data repository.
//!
//! Profiles are always returned together with their social links, loaded with a second
//! query ordered by creation time.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::profile::{Profile, UpsertProfileParam},
    util::nanoid,
};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a profile by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile with its socials
    /// - `Ok(None)` - No profile with that ID
    /// - `Err(AppError)` - Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError> {
        let Some(entity) = entity::prelude::Profile::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.with_socials(entity).await.map(Some)
    }

    /// Finds the profile owned by a Discord user.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile with its socials
    /// - `Ok(None)` - The user has no profile
    /// - `Err(AppError)` - Database error
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<Profile>, AppError> {
        let Some(entity) = entity::prelude::Profile::find()
            .filter(entity::profile::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.with_socials(entity).await.map(Some)
    }

    /// Creates the user's profile or replaces its nickname and bio.
    ///
    /// A new profile gets a fresh nanoid; an existing one keeps its ID, socials and
    /// creation time.
    ///
    /// # Arguments
    /// - `param` - Validated profile fields
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created or updated profile
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, param: UpsertProfileParam) -> Result<Profile, AppError> {
        let now = Utc::now();
        let existing = entity::prelude::Profile::find()
            .filter(entity::profile::Column::DiscordId.eq(param.discord_id.to_string()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::profile::ActiveModel = existing.into();
                active.nickname = ActiveValue::Set(param.nickname);
                active.bio = ActiveValue::Set(param.bio);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::profile::ActiveModel {
                    id: ActiveValue::Set(nanoid::generate()),
                    discord_id: ActiveValue::Set(param.discord_id.to_string()),
                    nickname: ActiveValue::Set(param.nickname),
                    bio: ActiveValue::Set(param.bio),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?
            }
        };

        self.with_socials(entity).await
    }

    /// Updates nickname and bio of the profile with the given ID.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Updated profile
    /// - `Ok(None)` - No profile with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: &str,
        nickname: String,
        bio: Option<String>,
    ) -> Result<Option<Profile>, AppError> {
        let Some(existing) = entity::prelude::Profile::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = existing.into();
        active.nickname = ActiveValue::Set(nickname);
        active.bio = ActiveValue::Set(bio);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        self.with_socials(entity).await.map(Some)
    }

    /// Deletes a profile and its socials.
    ///
    /// Socials are removed in the same transaction rather than relying on the
    /// connection having foreign key enforcement enabled.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile deleted
    /// - `Ok(false)` - No profile with that ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Social::delete_many()
            .filter(entity::social::Column::ProfileId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Profile::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets profiles ordered by nickname with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of profiles per page
    ///
    /// # Returns
    /// - `Ok((profiles, total))` - Profiles for the page and the total number of profiles
    /// - `Err(AppError)` - Database error
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Profile>, u64), AppError> {
        let paginator = entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Nickname)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let profile_ids: Vec<String> = entities.iter().map(|p| p.id.clone()).collect();
        let mut socials_by_profile: HashMap<String, Vec<entity::social::Model>> = HashMap::new();
        for social in entity::prelude::Social::find()
            .filter(entity::social::Column::ProfileId.is_in(profile_ids))
            .order_by_asc(entity::social::Column::CreatedAt)
            .all(self.db)
            .await?
        {
            socials_by_profile
                .entry(social.profile_id.clone())
                .or_default()
                .push(social);
        }

        let profiles = entities
            .into_iter()
            .map(|entity| {
                let socials = socials_by_profile.remove(&entity.id).unwrap_or_default();
                Profile::from_entity(entity, socials)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((profiles, total))
    }

    async fn with_socials(&self, entity: entity::profile::Model) -> Result<Profile, AppError> {
        let socials = entity::prelude::Social::find()
            .filter(entity::social::Column::ProfileId.eq(entity.id.clone()))
            .order_by_asc(entity::social::Column::CreatedAt)
            .all(self.db)
            .await?;

        Profile::from_entity(entity, socials)
    }
}
