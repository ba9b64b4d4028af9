//! User service for dashboard accounts and admin management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{PaginatedUsers, User},
    service::page_count,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - User has never logged into the dashboard
    /// - `Err(AppError)` - Database error
    pub async fn get_user(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await
    }

    /// Retrieves all users ordered by name with pagination metadata.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    pub async fn get_all_admins(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all_admins().await
    }

    /// Grants admin privileges to an existing user.
    ///
    /// # Returns
    /// - `Ok(())` - Admin status granted (or already held)
    /// - `Err(AppError::NotFound)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error
    pub async fn add_admin(&self, discord_id: u64) -> Result<(), AppError> {
        self.set_admin(discord_id, true).await
    }

    /// Revokes admin privileges from an existing user.
    ///
    /// # Returns
    /// - `Ok(())` - Admin status revoked
    /// - `Err(AppError::NotFound)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error
    pub async fn remove_admin(&self, discord_id: u64) -> Result<(), AppError> {
        self.set_admin(discord_id, false).await
    }

    async fn set_admin(&self, discord_id: u64, is_admin: bool) -> Result<(), AppError> {
        let updated = UserRepository::new(self.db)
            .set_admin(discord_id, is_admin)
            .await?;

        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
