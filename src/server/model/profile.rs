//! Profile and social link domain models.
//!
//! A profile belongs to exactly one Discord user and owns up to [`MAX_SOCIALS`] social
//! links. Validation lives on the parameter types so that the dashboard API and the
//! bot's modal submissions share the same limits.

use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    model::profile::{PaginatedProfilesDto, ProfileDto, SocialDto},
    server::{
        error::AppError,
        model::{check_length, normalize_optional},
        util::parse::parse_u64_from_string,
    },
};

pub const NICKNAME_MAX_LENGTH: usize = 32;
pub const BIO_MAX_LENGTH: usize = 1024;
pub const PLATFORM_MAX_LENGTH: usize = 32;
pub const URL_MAX_LENGTH: usize = 256;
pub const MAX_SOCIALS: usize = 10;

/// A user's profile with its social links.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub discord_id: u64,
    pub nickname: String,
    pub bio: Option<String>,
    /// Ordered by creation time.
    pub socials: Vec<Social>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Converts a profile row and its social rows into the domain model.
    ///
    /// # Arguments
    /// - `entity` - The profile row
    /// - `socials` - Social rows belonging to the profile
    ///
    /// # Returns
    /// - `Ok(Profile)` - The converted profile
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(
        entity: entity::profile::Model,
        socials: Vec<entity::social::Model>,
    ) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            id: entity.id,
            discord_id,
            nickname: entity.nickname,
            bio: entity.bio,
            socials: socials.into_iter().map(Social::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            discord_id: self.discord_id,
            nickname: self.nickname,
            bio: self.bio,
            socials: self.socials.into_iter().map(Social::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Finds a social link by platform name, ignoring case.
    pub fn social_by_platform(&self, platform: &str) -> Option<&Social> {
        self.socials
            .iter()
            .find(|s| s.platform.eq_ignore_ascii_case(platform.trim()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Social {
    pub id: String,
    pub profile_id: String,
    pub platform: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Social {
    pub fn from_entity(entity: entity::social::Model) -> Self {
        Self {
            id: entity.id,
            profile_id: entity.profile_id,
            platform: entity.platform,
            url: entity.url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SocialDto {
        SocialDto {
            id: self.id,
            platform: self.platform,
            url: self.url,
        }
    }
}

/// Parameters for creating or replacing a profile's editable fields.
#[derive(Debug, Clone)]
pub struct UpsertProfileParam {
    pub discord_id: u64,
    pub nickname: String,
    pub bio: Option<String>,
}

impl UpsertProfileParam {
    /// Builds a trimmed parameter set, treating a blank bio as no bio.
    pub fn new(discord_id: u64, nickname: &str, bio: Option<String>) -> Self {
        Self {
            discord_id,
            nickname: nickname.trim().to_string(),
            bio: normalize_optional(bio),
        }
    }

    /// # Returns
    /// - `Ok(())` - Nickname is 1..=32 characters and bio at most 1024
    /// - `Err(AppError::BadRequest)` - A field is out of bounds
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("Nickname", &self.nickname, 1, NICKNAME_MAX_LENGTH)?;
        if let Some(bio) = &self.bio {
            check_length("Bio", bio, 0, BIO_MAX_LENGTH)?;
        }
        Ok(())
    }
}

/// Parameters for adding a social link to a profile.
#[derive(Debug, Clone)]
pub struct CreateSocialParam {
    pub profile_id: String,
    pub platform: String,
    pub url: String,
}

impl CreateSocialParam {
    pub fn new(profile_id: String, platform: &str, url: &str) -> Self {
        Self {
            profile_id,
            platform: platform.trim().to_string(),
            url: url.trim().to_string(),
        }
    }

    /// # Returns
    /// - `Ok(())` - Platform is 1..=32 characters and url an http(s) URL of at most 256
    /// - `Err(AppError::BadRequest)` - A field is invalid
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("Platform", &self.platform, 1, PLATFORM_MAX_LENGTH)?;
        check_length("URL", &self.url, 1, URL_MAX_LENGTH)?;

        let parsed = Url::parse(&self.url)
            .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid URL", self.url)))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(AppError::BadRequest(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

/// Paginated collection of profiles with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProfiles {
    pub profiles: Vec<Profile>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProfiles {
    pub fn into_dto(self) -> PaginatedProfilesDto {
        PaginatedProfilesDto {
            profiles: self.profiles.into_iter().map(Profile::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
