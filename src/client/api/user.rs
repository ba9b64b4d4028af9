use crate::{
    client::{
        api::helper::{delete, get, parse_empty_response, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::user::{PaginatedUsersDto, UserDto},
};

/// The logged in user, `None` for an anonymous session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

pub async fn get_all_users(page: u64, entries: u64) -> Result<PaginatedUsersDto, ApiError> {
    let url = format!("/api/admin/users?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_all_admins() -> Result<Vec<UserDto>, ApiError> {
    let response = send_request(get("/api/admin/admins")).await?;
    parse_response(response).await
}

pub async fn add_admin(user_id: u64) -> Result<(), ApiError> {
    let url = format!("/api/admin/admins/{}", user_id);
    let response = send_request(post(&url)).await?;
    parse_empty_response(response).await
}

pub async fn remove_admin(user_id: u64) -> Result<(), ApiError> {
    let url = format!("/api/admin/admins/{}", user_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
