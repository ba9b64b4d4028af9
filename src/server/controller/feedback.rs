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
        feedback::{FeedbackDto, PaginatedFeedbackDto, UpdateFeedbackStatusDto},
    },
    server::{
        controller::param::FeedbackQueryParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::feedback::GetFeedbackParam,
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Get paginated feedback tickets, newest first.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `params` - Pagination and an optional status filter
///
/// # Returns
/// - `200 OK` - Paginated tickets
/// - `400 Bad Request` - Unknown status in the filter
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("status" = Option<String>, Query, description = "Only tickets in this status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved feedback", body = PaginatedFeedbackDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FeedbackQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = GetFeedbackParam {
        status: params.status,
        page: params.page,
        per_page: params.per_page(),
    };
    let feedback = FeedbackService::new(&state.db).get_paginated(param).await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Get a feedback ticket by ID.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The ticket
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No ticket with that ID
#[utoipa::path(
    get,
    path = "/api/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Successfully retrieved feedback", body = FeedbackDto),
        (status = 400, description = "Malformed feedback ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let feedback = FeedbackService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Move a feedback ticket to another status.
///
/// Only transitions from the status table are accepted, see
/// [`FeedbackStatus::next_statuses`](crate::model::feedback::FeedbackStatus::next_statuses).
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The ticket after the transition
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No ticket with that ID
/// - `409 Conflict` - Transition not allowed
#[utoipa::path(
    put,
    path = "/api/feedback/{id}/status",
    tag = FEEDBACK_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    request_body = UpdateFeedbackStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = FeedbackDto),
        (status = 400, description = "Malformed feedback ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 409, description = "Status transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_feedback_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateFeedbackStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let feedback = FeedbackService::new(&state.db)
        .update_status(&id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Delete a feedback ticket.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Ticket deleted
/// - `400 Bad Request` - Malformed ID, nothing queried
/// - `404 Not Found` - No ticket with that ID
#[utoipa::path(
    delete,
    path = "/api/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 204, description = "Successfully deleted feedback"),
        (status = 400, description = "Malformed feedback ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    FeedbackService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
