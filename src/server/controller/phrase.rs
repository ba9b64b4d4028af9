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
        phrase::{CreatePhraseDto, PaginatedPhrasesDto, PhraseDto, UpdatePhraseDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::phrase::PhraseParam,
        service::phrase::PhraseService,
        state::AppState,
    },
};

/// Tag for grouping phrase endpoints in OpenAPI documentation
pub static PHRASE_TAG: &str = "phrase";

/// Get paginated phrases, newest first.
///
/// Public; the phrases are shown by the bot to anyone anyway.
#[utoipa::path(
    get,
    path = "/api/phrases",
    tag = PHRASE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved phrases", body = PaginatedPhrasesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_phrases(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let phrases = PhraseService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(phrases.into_dto())))
}

/// Create a phrase.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new phrase
/// - `400 Bad Request` - Content or source out of bounds
#[utoipa::path(
    post,
    path = "/api/phrases",
    tag = PHRASE_TAG,
    request_body = CreatePhraseDto,
    responses(
        (status = 201, description = "Successfully created phrase", body = PhraseDto),
        (status = 400, description = "Invalid phrase data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_phrase(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePhraseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = PhraseParam::new(&payload.content, payload.source);
    let phrase = PhraseService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(phrase.into_dto())))
}

/// Update a phrase.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated phrase
/// - `400 Bad Request` - Malformed ID or invalid fields
/// - `404 Not Found` - No phrase with that ID
#[utoipa::path(
    put,
    path = "/api/phrases/{id}",
    tag = PHRASE_TAG,
    params(("id" = String, Path, description = "Phrase ID")),
    request_body = UpdatePhraseDto,
    responses(
        (status = 200, description = "Successfully updated phrase", body = PhraseDto),
        (status = 400, description = "Invalid phrase data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Phrase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_phrase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePhraseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = PhraseParam::new(&payload.content, payload.source);
    let phrase = PhraseService::new(&state.db).update(&id, param).await?;

    Ok((StatusCode::OK, Json(phrase.into_dto())))
}

/// Delete a phrase.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Phrase deleted
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No phrase with that ID
#[utoipa::path(
    delete,
    path = "/api/phrases/{id}",
    tag = PHRASE_TAG,
    params(("id" = String, Path, description = "Phrase ID")),
    responses(
        (status = 204, description = "Successfully deleted phrase"),
        (status = 400, description = "Malformed phrase ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Phrase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_phrase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PhraseService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
