use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Lifecycle of a feedback ticket.
///
/// ```text
/// OPEN -> ACKNOWLEDGED -> CLOSED
///                      -> ACCEPTED -> RESOLVED
///                      -> REJECTED
/// ```
///
/// Shared by the server, which enforces the transitions, and the dashboard, which only
/// offers the transitions the server will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum FeedbackStatus {
    Open,
    Acknowledged,
    Closed,
    Accepted,
    Resolved,
    Rejected,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 6] = [
        FeedbackStatus::Open,
        FeedbackStatus::Acknowledged,
        FeedbackStatus::Closed,
        FeedbackStatus::Accepted,
        FeedbackStatus::Resolved,
        FeedbackStatus::Rejected,
    ];

    /// Statuses reachable from `self` in a single step.
    pub fn next_statuses(&self) -> &'static [FeedbackStatus] {
        match self {
            FeedbackStatus::Open => &[FeedbackStatus::Acknowledged],
            FeedbackStatus::Acknowledged => &[
                FeedbackStatus::Closed,
                FeedbackStatus::Accepted,
                FeedbackStatus::Rejected,
            ],
            FeedbackStatus::Accepted => &[FeedbackStatus::Resolved],
            FeedbackStatus::Closed | FeedbackStatus::Resolved | FeedbackStatus::Rejected => &[],
        }
    }

    pub fn can_transition_to(&self, next: FeedbackStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Database and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Open => "OPEN",
            FeedbackStatus::Acknowledged => "ACKNOWLEDGED",
            FeedbackStatus::Closed => "CLOSED",
            FeedbackStatus::Accepted => "ACCEPTED",
            FeedbackStatus::Resolved => "RESOLVED",
            FeedbackStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Open => "Open",
            FeedbackStatus::Acknowledged => "Acknowledged",
            FeedbackStatus::Closed => "Closed",
            FeedbackStatus::Accepted => "Accepted",
            FeedbackStatus::Resolved => "Resolved",
            FeedbackStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeedbackStatus(pub String);

impl fmt::Display for UnknownFeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown feedback status '{}'", self.0)
    }
}

impl FromStr for FeedbackStatus {
    type Err = UnknownFeedbackStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedbackStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFeedbackStatus(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FeedbackDto {
    pub id: String,
    #[serde(with = "crate::model::id::u64_string")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub title: String,
    pub content: String,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateFeedbackStatusDto {
    pub status: FeedbackStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedFeedbackDto {
    pub feedback: Vec<FeedbackDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_only_moves_to_acknowledged() {
        assert!(FeedbackStatus::Open.can_transition_to(FeedbackStatus::Acknowledged));
        for status in FeedbackStatus::ALL {
            if status != FeedbackStatus::Acknowledged {
                assert!(!FeedbackStatus::Open.can_transition_to(status));
            }
        }
    }

    #[test]
    fn acknowledged_branches_three_ways() {
        let next = FeedbackStatus::Acknowledged.next_statuses();
        assert_eq!(next.len(), 3);
        assert!(next.contains(&FeedbackStatus::Closed));
        assert!(next.contains(&FeedbackStatus::Accepted));
        assert!(next.contains(&FeedbackStatus::Rejected));
        assert!(!FeedbackStatus::Acknowledged.can_transition_to(FeedbackStatus::Resolved));
    }

    #[test]
    fn accepted_resolves() {
        assert_eq!(
            FeedbackStatus::Accepted.next_statuses(),
            &[FeedbackStatus::Resolved]
        );
    }

    #[test]
    fn terminal_statuses_have_no_exits() {
        for status in [
            FeedbackStatus::Closed,
            FeedbackStatus::Resolved,
            FeedbackStatus::Rejected,
        ] {
            assert!(status.is_terminal());
        }
        assert!(!FeedbackStatus::Open.is_terminal());
    }

    #[test]
    fn no_status_transitions_to_itself() {
        for status in FeedbackStatus::ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "acknowledged".parse::<FeedbackStatus>(),
            Ok(FeedbackStatus::Acknowledged)
        );
        assert_eq!("RESOLVED".parse::<FeedbackStatus>(), Ok(FeedbackStatus::Resolved));
        assert!("PENDING".parse::<FeedbackStatus>().is_err());
    }

    #[test]
    fn serializes_as_screaming_case() {
        let json = serde_json::to_string(&FeedbackStatus::Acknowledged).unwrap();
        assert_eq!(json, "\"ACKNOWLEDGED\"");
    }
}
