//! Dashboard accounts keyed by Discord ID.
//!
//! A row is created or refreshed on every OAuth login. The admin flag gates the admin
//! API and the admin dashboard pages.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub discord_id: u64,
    pub name: String,
    pub admin: bool,
    /// First login.
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        let Self {
            discord_id,
            name,
            admin,
            ..
        } = self;
        UserDto {
            discord_id,
            name,
            admin,
        }
    }

    /// Fails with `InternalErr(ParseStringId)` when the stored Discord ID is not numeric.
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            admin: entity.admin,
            created_at: entity.created_at,
        })
    }
}

/// Login upsert. `is_admin: None` leaves an existing admin flag untouched so a name
/// refresh never demotes anyone.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: u64,
    pub name: String,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    /// Zero-based.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
