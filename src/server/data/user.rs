//! Dashboard accounts. Rows are keyed by the Discord ID stored as a string.

use chrono::Utc;
use entity::user::{ActiveModel, Column};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn admins() -> Select<entity::prelude::User> {
        entity::prelude::User::find().filter(Column::Admin.eq(true))
    }

    /// Inserts the user or refreshes their name on conflict.
    ///
    /// The admin column is only overwritten when `param.is_admin` is set, so a plain
    /// login keeps whatever flag the user already has.
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let update_columns = match param.is_admin {
            Some(_) => vec![Column::Name, Column::Admin],
            None => vec![Column::Name],
        };

        let row = ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or_default()),
            created_at: ActiveValue::Set(Utc::now()),
        };

        let entity = entity::prelude::User::insert(row)
            .on_conflict(
                OnConflict::column(Column::DiscordId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Startup check deciding whether an admin bootstrap code must be printed.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(Self::admins().count(self.db).await? > 0)
    }

    /// One page of users sorted by name, plus the total user count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;
        let users = rows
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    pub async fn get_all_admins(&self) -> Result<Vec<User>, AppError> {
        Self::admins()
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Returns `false` when no user has that Discord ID.
    pub async fn set_admin(&self, user_id: u64, is_admin: bool) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(Column::Admin, Expr::value(is_admin))
            .filter(Column::DiscordId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
