use dioxus::prelude::*;

use crate::model::feedback::FeedbackStatus;

fn badge_class(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::Open => "badge-info",
        FeedbackStatus::Acknowledged => "badge-warning",
        FeedbackStatus::Accepted => "badge-primary",
        FeedbackStatus::Resolved => "badge-success",
        FeedbackStatus::Closed => "badge-neutral",
        FeedbackStatus::Rejected => "badge-error",
    }
}

#[component]
pub fn StatusBadge(status: FeedbackStatus) -> Element {
    let class = badge_class(status);

    rsx!(span { class: "badge {class}", "{status.label()}" })
}
