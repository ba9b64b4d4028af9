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
        stats::StatsDto,
        user::{PaginatedUsersDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{stats::StatsService, user::UserService},
        state::AppState,
        util::parse::parse_discord_id,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get paginated dashboard users.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get every admin.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved admins", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let admins = UserService::new(&state.db).get_all_admins().await?;
    let dto: Vec<UserDto> = admins.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Grant admin to an existing user.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `id` - Discord ID of the user
///
/// # Returns
/// - `204 No Content` - Admin granted
/// - `400 Bad Request` - Not a Discord ID
/// - `404 Not Found` - The user never logged in
#[utoipa::path(
    post,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Discord ID of the user")),
    responses(
        (status = 204, description = "Successfully granted admin"),
        (status = 400, description = "Invalid Discord ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let discord_id = parse_discord_id(&id)?;
    UserService::new(&state.db).add_admin(discord_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Revoke admin from a user.
///
/// Admins cannot revoke themselves, so the caller always stays an admin.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Admin revoked
/// - `400 Bad Request` - Not a Discord ID, or the caller's own ID
/// - `404 Not Found` - No such user
#[utoipa::path(
    delete,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Discord ID of the user")),
    responses(
        (status = 204, description = "Successfully revoked admin"),
        (status = 400, description = "Invalid Discord ID or own ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let discord_id = parse_discord_id(&id)?;
    if discord_id == user.discord_id {
        return Err(AppError::BadRequest(
            "You cannot remove your own admin access".to_string(),
        ));
    }

    UserService::new(&state.db).remove_admin(discord_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the interaction telemetry counters.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved stats", body = StatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(state.store.as_ref()).get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
