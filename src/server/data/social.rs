//! Social link data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::profile::{CreateSocialParam, Social},
    util::nanoid,
};

pub struct SocialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a social link. Uniqueness and count limits are checked by the caller.
    ///
    /// # Returns
    /// - `Ok(Social)` - The created link
    /// - `Err(AppError)` - Database error, including the unique (profile, platform) index
    pub async fn create(&self, param: CreateSocialParam) -> Result<Social, AppError> {
        let entity = entity::social::ActiveModel {
            id: ActiveValue::Set(nanoid::generate()),
            profile_id: ActiveValue::Set(param.profile_id),
            platform: ActiveValue::Set(param.platform),
            url: ActiveValue::Set(param.url),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Social::from_entity(entity))
    }

    /// Gets the links of a profile ordered by creation time.
    pub async fn get_by_profile_id(&self, profile_id: &str) -> Result<Vec<Social>, AppError> {
        let entities = entity::prelude::Social::find()
            .filter(entity::social::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::social::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Social::from_entity).collect())
    }

    /// Counts the links of a profile.
    pub async fn count_by_profile_id(&self, profile_id: &str) -> Result<u64, AppError> {
        let count = entity::prelude::Social::find()
            .filter(entity::social::Column::ProfileId.eq(profile_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Deletes a link, scoped to its profile so one profile cannot remove another's link.
    ///
    /// # Returns
    /// - `Ok(true)` - Link deleted
    /// - `Ok(false)` - No link with that ID on the profile
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, profile_id: &str, social_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Social::delete_many()
            .filter(entity::social::Column::Id.eq(social_id))
            .filter(entity::social::Column::ProfileId.eq(profile_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
