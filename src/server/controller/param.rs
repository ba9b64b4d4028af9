use serde::Deserialize;

use crate::model::feedback::FeedbackStatus;

const DEFAULT_PAGE: u64 = 0;
const DEFAULT_ENTRIES: u64 = 10;
const MAX_ENTRIES: u64 = 100;

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

/// `?page&entries` query of every paginated endpoint.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct PaginationParam {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParam {
    /// Page size clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

/// `GET /api/feedback` query; pagination plus an optional status filter.
#[derive(Deserialize, Debug, Clone)]
pub struct FeedbackQueryParam {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub status: Option<FeedbackStatus>,
}

impl FeedbackQueryParam {
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}
