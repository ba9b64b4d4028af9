use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        profile::{
            CreateSocialDto, PaginatedProfilesDto, ProfileDto, SocialDto, UpdateProfileDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get paginated profiles.
///
/// # Access Control
/// - `Admin` - Only admins can browse profiles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated profiles with their socials
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved profiles", body = PaginatedProfilesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profiles = ProfileService::new(&state.db)
        .get_all(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(profiles.into_dto())))
}

/// Get a profile by ID.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The profile
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No profile with that ID
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = String, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Successfully retrieved profile", body = ProfileDto),
        (status = 400, description = "Malformed profile ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profile = ProfileService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update a profile's nickname and bio.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - Malformed ID, nickname or bio out of bounds
/// - `404 Not Found` - No profile with that ID
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = String, Path, description = "Profile ID")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Successfully updated profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profile = ProfileService::new(&state.db)
        .update(&id, &payload.nickname, payload.bio)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Delete a profile and its social links.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Profile deleted
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No profile with that ID
#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = String, Path, description = "Profile ID")),
    responses(
        (status = 204, description = "Successfully deleted profile"),
        (status = 400, description = "Malformed profile ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProfileService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a social link to a profile.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new link
/// - `400 Bad Request` - Invalid platform or URL, or the profile is full
/// - `404 Not Found` - No profile with that ID
/// - `409 Conflict` - The profile already links that platform
#[utoipa::path(
    post,
    path = "/api/profiles/{id}/socials",
    tag = PROFILE_TAG,
    params(("id" = String, Path, description = "Profile ID")),
    request_body = CreateSocialDto,
    responses(
        (status = 201, description = "Successfully added social link", body = SocialDto),
        (status = 400, description = "Invalid social link", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 409, description = "Platform already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_social(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<CreateSocialDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let social = ProfileService::new(&state.db)
        .add_social(&id, &payload.platform, &payload.url)
        .await?;

    Ok((StatusCode::CREATED, Json(social.into_dto())))
}

/// Remove a social link from a profile.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Link removed
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No such link on that profile
#[utoipa::path(
    delete,
    path = "/api/profiles/{id}/socials/{social_id}",
    tag = PROFILE_TAG,
    params(
        ("id" = String, Path, description = "Profile ID"),
        ("social_id" = String, Path, description = "Social link ID")
    ),
    responses(
        (status = 204, description = "Successfully removed social link"),
        (status = 400, description = "Malformed ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Social link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_social(
    State(state): State<AppState>,
    session: Session,
    Path((id, social_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProfileService::new(&state.db)
        .remove_social(&id, &social_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
