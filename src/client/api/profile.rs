use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, put, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::profile::{PaginatedProfilesDto, ProfileDto, UpdateProfileDto},
};

pub async fn get_profiles(page: u64, entries: u64) -> Result<PaginatedProfilesDto, ApiError> {
    let url = format!("/api/profiles?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_profile(id: &str, payload: UpdateProfileDto) -> Result<ProfileDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/profiles/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_profile(id: &str) -> Result<(), ApiError> {
    let url = format!("/api/profiles/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn remove_social(profile_id: &str, social_id: &str) -> Result<(), ApiError> {
    let url = format!("/api/profiles/{}/socials/{}", profile_id, social_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
