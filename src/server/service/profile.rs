//! Profile and social link management.
//!
//! Self-service operations are keyed by the caller's Discord ID and back the bot's
//! `/profile` commands and the dashboard's own-profile view. ID-keyed operations back
//! the admin API.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{profile::ProfileRepository, social::SocialRepository},
    error::AppError,
    model::profile::{
        CreateSocialParam, PaginatedProfiles, Profile, Social, UpsertProfileParam,
        MAX_SOCIALS,
    },
    service::page_count,
    util::nanoid,
};

pub const NO_PROFILE_MESSAGE: &str = "You don't have a profile yet. Create one with /profile edit.";

pub struct ProfileService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile owned by a Discord user, if any.
    pub async fn get_by_discord_id(&self, discord_id: u64) -> Result<Option<Profile>, AppError> {
        ProfileRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await
    }

    /// # Returns
    /// - `Ok(Profile)` - The profile with its socials
    /// - `Err(AppError::BadRequest)` - Malformed ID
    /// - `Err(AppError::NotFound)` - No profile with that ID
    pub async fn get_by_id(&self, id: &str) -> Result<Profile, AppError> {
        nanoid::validate(id, "profile")?;

        ProfileRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    pub async fn get_all(&self, page: u64, per_page: u64) -> Result<PaginatedProfiles, AppError> {
        let (profiles, total) = ProfileRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedProfiles {
            profiles,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Creates or replaces the caller's nickname and bio.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The stored profile
    /// - `Err(AppError::BadRequest)` - Nickname or bio out of bounds
    pub async fn upsert(&self, param: UpsertProfileParam) -> Result<Profile, AppError> {
        param.validate()?;
        ProfileRepository::new(self.db).upsert(param).await
    }

    /// Replaces nickname and bio of a profile by ID.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The updated profile
    /// - `Err(AppError::BadRequest)` - Malformed ID or invalid fields
    /// - `Err(AppError::NotFound)` - No profile with that ID
    pub async fn update(
        &self,
        id: &str,
        nickname: &str,
        bio: Option<String>,
    ) -> Result<Profile, AppError> {
        nanoid::validate(id, "profile")?;
        // Discord ID is irrelevant for validation of the editable fields.
        let param = UpsertProfileParam::new(0, nickname, bio);
        param.validate()?;

        ProfileRepository::new(self.db)
            .update(id, param.nickname, param.bio)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Deletes a profile and its socials by ID.
    ///
    /// # Returns
    /// - `Ok(())` - Profile deleted
    /// - `Err(AppError::BadRequest)` - Malformed ID, nothing queried
    /// - `Err(AppError::NotFound)` - No profile with that ID
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        nanoid::validate(id, "profile")?;

        if !ProfileRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }

    /// Deletes the caller's own profile.
    ///
    /// # Returns
    /// - `Ok(())` - Profile deleted
    /// - `Err(AppError::NotFound)` - The caller has no profile
    pub async fn delete_own(&self, discord_id: u64) -> Result<(), AppError> {
        let profile = self.own_profile(discord_id).await?;
        ProfileRepository::new(self.db).delete(&profile.id).await?;
        Ok(())
    }

    /// Adds a social link to the profile with the given ID.
    ///
    /// # Returns
    /// - `Ok(Social)` - The created link
    /// - `Err(AppError::BadRequest)` - Invalid fields or the profile already has the maximum
    /// - `Err(AppError::NotFound)` - No profile with that ID
    /// - `Err(AppError::Conflict)` - The profile already links that platform
    pub async fn add_social(
        &self,
        profile_id: &str,
        platform: &str,
        url: &str,
    ) -> Result<Social, AppError> {
        let profile = self.get_by_id(profile_id).await?;
        self.insert_social(&profile, platform, url).await
    }

    /// Adds a social link to the caller's own profile.
    ///
    /// Same rules as [`add_social`](Self::add_social); a caller without a profile gets
    /// `NotFound` with a hint to create one.
    pub async fn add_own_social(
        &self,
        discord_id: u64,
        platform: &str,
        url: &str,
    ) -> Result<Social, AppError> {
        let profile = self.own_profile(discord_id).await?;
        self.insert_social(&profile, platform, url).await
    }

    /// Removes a social link by ID from the profile with the given ID.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(AppError::BadRequest)` - Malformed profile or social ID
    /// - `Err(AppError::NotFound)` - No such link on that profile
    pub async fn remove_social(&self, profile_id: &str, social_id: &str) -> Result<(), AppError> {
        nanoid::validate(profile_id, "profile")?;
        nanoid::validate(social_id, "social")?;

        if !SocialRepository::new(self.db)
            .delete(profile_id, social_id)
            .await?
        {
            return Err(AppError::NotFound("Social link not found".to_string()));
        }

        Ok(())
    }

    /// Removes the caller's link for `platform`, matched case-insensitively.
    ///
    /// # Returns
    /// - `Ok(Social)` - The removed link
    /// - `Err(AppError::NotFound)` - No profile, or no link for that platform
    pub async fn remove_own_social(
        &self,
        discord_id: u64,
        platform: &str,
    ) -> Result<Social, AppError> {
        let profile = self.own_profile(discord_id).await?;
        let social = profile
            .social_by_platform(platform.trim())
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("You have no social link for '{}'", platform.trim()))
            })?;

        SocialRepository::new(self.db)
            .delete(&profile.id, &social.id)
            .await?;

        Ok(social)
    }

    async fn own_profile(&self, discord_id: u64) -> Result<Profile, AppError> {
        self.get_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_PROFILE_MESSAGE.to_string()))
    }

    async fn insert_social(
        &self,
        profile: &Profile,
        platform: &str,
        url: &str,
    ) -> Result<Social, AppError> {
        let param = CreateSocialParam::new(profile.id.clone(), platform, url);
        param.validate()?;

        if profile.social_by_platform(&param.platform).is_some() {
            return Err(AppError::Conflict(format!(
                "A social link for '{}' already exists",
                param.platform
            )));
        }

        let social_repo = SocialRepository::new(self.db);
        if social_repo.count_by_profile_id(&profile.id).await? >= MAX_SOCIALS as u64 {
            return Err(AppError::BadRequest(format!(
                "A profile can have at most {} social links",
                MAX_SOCIALS
            )));
        }

        social_repo.create(param).await
    }
}
