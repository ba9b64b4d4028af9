//! Feedback ticket submission, viewing and status transitions.

use sea_orm::DatabaseConnection;

use crate::{
    model::feedback::FeedbackStatus,
    server::{
        data::feedback::FeedbackRepository,
        error::AppError,
        model::feedback::{CreateFeedbackParam, Feedback, GetFeedbackParam, PaginatedFeedback},
        service::page_count,
        util::nanoid,
    },
};

/// Number of tickets `/feedback list` shows.
pub const RECENT_FEEDBACK_LIMIT: u64 = 10;

pub struct FeedbackService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new OPEN ticket.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored ticket
    /// - `Err(AppError::BadRequest)` - Title or content out of bounds
    pub async fn submit(&self, param: CreateFeedbackParam) -> Result<Feedback, AppError> {
        param.validate()?;
        FeedbackRepository::new(self.db).create(param).await
    }

    /// # Returns
    /// - `Ok(Feedback)` - The ticket
    /// - `Err(AppError::BadRequest)` - Malformed ID
    /// - `Err(AppError::NotFound)` - No ticket with that ID
    pub async fn get(&self, id: &str) -> Result<Feedback, AppError> {
        nanoid::validate(id, "feedback")?;

        FeedbackRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))
    }

    /// Gets a ticket on behalf of a viewer.
    ///
    /// Only the author and bot owners may see a ticket. Anyone else gets the same
    /// `NotFound` as for a missing ticket so IDs of other users' tickets are not revealed.
    pub async fn get_for_viewer(
        &self,
        id: &str,
        viewer_id: u64,
        viewer_is_owner: bool,
    ) -> Result<Feedback, AppError> {
        let feedback = self.get(id).await?;

        if !viewer_is_owner && feedback.discord_id != viewer_id {
            return Err(AppError::NotFound("Feedback not found".to_string()));
        }

        Ok(feedback)
    }

    /// The author's most recent tickets, newest first.
    pub async fn get_recent_by_author(&self, discord_id: u64) -> Result<Vec<Feedback>, AppError> {
        FeedbackRepository::new(self.db)
            .get_by_author(discord_id, Some(RECENT_FEEDBACK_LIMIT))
            .await
    }

    /// Every ticket of the author, newest first.
    pub async fn get_all_by_author(&self, discord_id: u64) -> Result<Vec<Feedback>, AppError> {
        FeedbackRepository::new(self.db)
            .get_by_author(discord_id, None)
            .await
    }

    pub async fn get_paginated(&self, param: GetFeedbackParam) -> Result<PaginatedFeedback, AppError> {
        let (feedback, total) = FeedbackRepository::new(self.db)
            .get_paginated(param.status, param.page, param.per_page)
            .await?;

        Ok(PaginatedFeedback {
            feedback,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: page_count(total, param.per_page),
        })
    }

    /// Moves a ticket to `next`.
    ///
    /// The transition is checked against the status table first; the update itself
    /// only applies while the ticket is still in the status that was checked.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The ticket after the transition
    /// - `Err(AppError::BadRequest)` - Malformed ID
    /// - `Err(AppError::NotFound)` - No ticket with that ID
    /// - `Err(AppError::Conflict)` - Transition not allowed, or the ticket changed concurrently
    pub async fn update_status(&self, id: &str, next: FeedbackStatus) -> Result<Feedback, AppError> {
        let current = self.get(id).await?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::Conflict(format!(
                "Cannot move feedback from {} to {}",
                current.status.label(),
                next.label()
            )));
        }

        let repo = FeedbackRepository::new(self.db);
        if !repo.update_status(id, current.status, next).await? {
            return Err(AppError::Conflict(
                "Feedback was modified by someone else, try again".to_string(),
            ));
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))
    }

    /// # Returns
    /// - `Ok(())` - Ticket deleted
    /// - `Err(AppError::BadRequest)` - Malformed ID, nothing queried
    /// - `Err(AppError::NotFound)` - No ticket with that ID
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        nanoid::validate(id, "feedback")?;

        if !FeedbackRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Feedback not found".to_string()));
        }

        Ok(())
    }
}
