use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, put, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::feedback::{FeedbackDto, FeedbackStatus, PaginatedFeedbackDto, UpdateFeedbackStatusDto},
};

pub async fn get_feedback(
    page: u64,
    entries: u64,
    status: Option<FeedbackStatus>,
) -> Result<PaginatedFeedbackDto, ApiError> {
    let mut url = format!("/api/feedback?page={}&entries={}", page, entries);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_feedback_status(
    id: &str,
    status: FeedbackStatus,
) -> Result<FeedbackDto, ApiError> {
    let body = serialize_json(&UpdateFeedbackStatusDto { status })?;
    let url = format!("/api/feedback/{}/status", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_feedback(id: &str) -> Result<(), ApiError> {
    let url = format!("/api/feedback/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
