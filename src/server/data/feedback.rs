//! Feedback ticket data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::feedback::FeedbackStatus,
    server::{
        error::AppError,
        model::feedback::{CreateFeedbackParam, Feedback},
        util::nanoid,
    },
};

pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new ticket in the `OPEN` status.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The created ticket
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateFeedbackParam) -> Result<Feedback, AppError> {
        let now = Utc::now();
        let entity = entity::feedback::ActiveModel {
            id: ActiveValue::Set(nanoid::generate()),
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            status: ActiveValue::Set(FeedbackStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Feedback::from_entity(entity)
    }

    /// # Returns
    /// - `Ok(Some(Feedback))` - Ticket found
    /// - `Ok(None)` - No ticket with that ID
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Feedback>, AppError> {
        entity::prelude::Feedback::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Feedback::from_entity)
            .transpose()
    }

    /// Gets the most recent tickets of an author, newest first.
    ///
    /// # Arguments
    /// - `discord_id` - Author's Discord ID
    /// - `limit` - Maximum number of tickets, `None` for all
    pub async fn get_by_author(
        &self,
        discord_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Feedback>, AppError> {
        entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::DiscordId.eq(discord_id.to_string()))
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Feedback::from_entity)
            .collect()
    }

    /// Gets tickets newest first, optionally filtered by status.
    ///
    /// # Returns
    /// - `Ok((feedback, total))` - Tickets for the page and the total matching the filter
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn get_paginated(
        &self,
        status: Option<FeedbackStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Feedback>, u64), AppError> {
        let mut query = entity::prelude::Feedback::find();
        if let Some(status) = status {
            query = query.filter(entity::feedback::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let feedback = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Feedback::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((feedback, total))
    }

    /// Moves a ticket from `from` to `to`.
    ///
    /// The update only applies while the stored status still equals `from`, so two
    /// concurrent transitions cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - The ticket is missing or no longer in `from`
    /// - `Err(AppError)` - Database error
    pub async fn update_status(
        &self,
        id: &str,
        from: FeedbackStatus,
        to: FeedbackStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Feedback::update_many()
            .filter(entity::feedback::Column::Id.eq(id))
            .filter(entity::feedback::Column::Status.eq(from.as_str()))
            .col_expr(entity::feedback::Column::Status, Expr::value(to.as_str()))
            .col_expr(entity::feedback::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// # Returns
    /// - `Ok(true)` - Ticket deleted
    /// - `Ok(false)` - No ticket with that ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Feedback::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
