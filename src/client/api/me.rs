use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{feedback::FeedbackDto, profile::ProfileDto},
};

pub async fn get_own_profile() -> Result<Option<ProfileDto>, ApiError> {
    let response = send_request(get("/api/me/profile")).await?;
    parse_response(response).await
}

pub async fn get_own_feedback() -> Result<Vec<FeedbackDto>, ApiError> {
    let response = send_request(get("/api/me/feedback")).await?;
    parse_response(response).await
}
