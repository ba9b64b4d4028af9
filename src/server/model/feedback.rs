//! Feedback ticket domain models.
//!
//! Tickets move through the lifecycle defined by
//! [`FeedbackStatus`](crate::model::feedback::FeedbackStatus); the status is stored as
//! its SCREAMING_CASE name and parsed back at the repository boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::feedback::{FeedbackDto, FeedbackStatus, PaginatedFeedbackDto},
    server::{
        error::{internal::InternalError, AppError},
        model::check_length,
        util::parse::parse_u64_from_string,
    },
};

pub const TITLE_MAX_LENGTH: usize = 100;
pub const CONTENT_MAX_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: String,
    /// Discord ID of the author
    pub discord_id: u64,
    pub title: String,
    pub content: String,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Converts a feedback row into the domain model.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The converted ticket
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored author ID is not a u64
    /// - `Err(AppError::InternalErr(UnknownFeedbackStatus))` - Stored status is unknown
    pub fn from_entity(entity: entity::feedback::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;
        let status = entity.status.parse::<FeedbackStatus>().map_err(|_| {
            InternalError::UnknownFeedbackStatus {
                id: entity.id.clone(),
                status: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            discord_id,
            title: entity.title,
            content: entity.content,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            discord_id: self.discord_id,
            title: self.title,
            content: self.content,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for filing a new ticket. New tickets always start `OPEN`.
#[derive(Debug, Clone)]
pub struct CreateFeedbackParam {
    pub discord_id: u64,
    pub title: String,
    pub content: String,
}

impl CreateFeedbackParam {
    pub fn new(discord_id: u64, title: &str, content: &str) -> Self {
        Self {
            discord_id,
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }
    }

    /// # Returns
    /// - `Ok(())` - Title is 1..=100 characters and content 1..=2000
    /// - `Err(AppError::BadRequest)` - A field is out of bounds
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("Title", &self.title, 1, TITLE_MAX_LENGTH)?;
        check_length("Content", &self.content, 1, CONTENT_MAX_LENGTH)?;
        Ok(())
    }
}

/// Filter for admin listings.
#[derive(Debug, Clone)]
pub struct GetFeedbackParam {
    pub status: Option<FeedbackStatus>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFeedback {
    pub feedback: Vec<Feedback>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFeedback {
    pub fn into_dto(self) -> PaginatedFeedbackDto {
        PaginatedFeedbackDto {
            feedback: self.feedback.into_iter().map(Feedback::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
