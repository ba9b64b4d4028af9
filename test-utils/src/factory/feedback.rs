//! Feedback ticket factory.

use crate::factory::helpers::{next_id, next_nanoid};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating feedback tickets.
///
/// # Example
///
/// ```rust,ignore
/// let feedback = FeedbackFactory::new(&db, "123456789")
///     .status("ACKNOWLEDGED")
///     .build()
///     .await?;
/// ```
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    discord_id: String,
    title: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> FeedbackFactory<'a> {
    /// Defaults:
    /// - title: `"Feedback {id}"`
    /// - status: `"OPEN"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, discord_id: impl Into<String>) -> Self {
        Self {
            db,
            id: next_nanoid(),
            discord_id: discord_id.into(),
            title: format!("Feedback {}", next_id()),
            content: "Test feedback content".to_string(),
            status: "OPEN".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the stored status string, e.g. `"ACCEPTED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            id: ActiveValue::Set(self.id),
            discord_id: ActiveValue::Set(self.discord_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an OPEN ticket authored by `discord_id`.
pub async fn create_feedback(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db, discord_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_open_feedback() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let feedback = create_feedback(db, "42").await?;

        assert_eq!(feedback.status, "OPEN");
        assert_eq!(feedback.discord_id, "42");

        Ok(())
    }
}
