//! Phrase domain model.
//!
//! Phrases are short quotes served by `/phrase random` and rotated through the bot's
//! presence by the scheduler.

use chrono::{DateTime, Utc};

use crate::{
    model::phrase::{PaginatedPhrasesDto, PhraseDto},
    server::{
        error::AppError,
        model::{check_length, normalize_optional},
    },
};

pub const CONTENT_MAX_LENGTH: usize = 500;
pub const SOURCE_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub id: String,
    pub content: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Phrase {
    pub fn from_entity(entity: entity::phrase::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            source: entity.source,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhraseDto {
        PhraseDto {
            id: self.id,
            content: self.content,
            source: self.source,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating or editing a phrase.
#[derive(Debug, Clone)]
pub struct PhraseParam {
    pub content: String,
    pub source: Option<String>,
}

impl PhraseParam {
    pub fn new(content: &str, source: Option<String>) -> Self {
        Self {
            content: content.trim().to_string(),
            source: normalize_optional(source),
        }
    }

    /// # Returns
    /// - `Ok(())` - Content is 1..=500 characters and source at most 100
    /// - `Err(AppError::BadRequest)` - A field is out of bounds
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("Content", &self.content, 1, CONTENT_MAX_LENGTH)?;
        if let Some(source) = &self.source {
            check_length("Source", source, 0, SOURCE_MAX_LENGTH)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPhrases {
    pub phrases: Vec<Phrase>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPhrases {
    pub fn into_dto(self) -> PaginatedPhrasesDto {
        PaginatedPhrasesDto {
            phrases: self.phrases.into_iter().map(Phrase::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_content_and_source() {
        assert!(PhraseParam::new("Hello", None).validate().is_ok());
        assert!(PhraseParam::new(" ", None).validate().is_err());
        assert!(PhraseParam::new(&"x".repeat(501), None).validate().is_err());
        assert!(PhraseParam::new("Hello", Some("s".repeat(101)))
            .validate()
            .is_err());
    }

    #[test]
    fn blank_source_is_dropped() {
        let param = PhraseParam::new("Hello", Some("  ".to_string()));
        assert_eq!(param.source, None);
    }
}
