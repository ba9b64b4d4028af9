use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, feedback::FeedbackDto, profile::ProfileDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{feedback::FeedbackService, profile::ProfileService},
        state::AppState,
    },
};

/// Tag for grouping endpoints about the logged in user in OpenAPI documentation
pub static ME_TAG: &str = "me";

/// Get the logged in user's profile.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - The user's profile, or `null` when they have none
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/me/profile",
    tag = ME_TAG,
    responses(
        (status = 200, description = "Own profile or null", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = ProfileService::new(&state.db)
        .get_by_discord_id(user.discord_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.map(|p| p.into_dto()))))
}

/// Get every feedback ticket the logged in user filed, newest first.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - The user's tickets
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/me/feedback",
    tag = ME_TAG,
    responses(
        (status = 200, description = "Own feedback tickets", body = Vec<FeedbackDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_feedback(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let feedback = FeedbackService::new(&state.db)
        .get_all_by_author(user.discord_id)
        .await?;

    let dto: Vec<FeedbackDto> = feedback.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
