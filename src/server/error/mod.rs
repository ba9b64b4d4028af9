//! Error hierarchy shared by the REST API and the bot.
//!
//! `AppError` is what services and data repositories return. The API turns it into a
//! JSON `ErrorDto` response, the bot wraps it in `CommandError` and renders it as an
//! ephemeral reply.

pub mod auth;
pub mod command;
pub mod config;
pub mod internal;
pub mod registry;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, registry::RegistryError,
        store::StoreError,
    },
};

const GENERIC_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Maps to its own status codes, see `AuthError`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// An outgoing HTTP call failed: Discord OAuth or one of the utility command APIs.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Boxed, `serenity::Error` would otherwise bloat every variant.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Cooldown or telemetry store failure.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// 404, message shown to the caller.
    #[error("{0}")]
    NotFound(String),

    /// 400, message shown to the caller.
    #[error("{0}")]
    BadRequest(String),

    /// 409, e.g. a duplicate social link or a disallowed status transition.
    #[error("{0}")]
    Conflict(String),

    /// 500 with a message that is only logged.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Whether the error was caused by the request itself.
    ///
    /// Expected errors carry a message written for the end user; anything else is
    /// logged and answered with a generic message.
    pub fn is_expected(&self) -> bool {
        self.client_status().is_some()
    }

    fn client_status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            Self::Conflict(_) => Some(StatusCode::CONFLICT),
            _ => None,
        }
    }
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::AuthErr(err) = self {
            return err.into_response();
        }

        match self.client_status() {
            Some(status) => (
                status,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            None => InternalServerError(self).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 without leaking its details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: GENERIC_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_status() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert!(err.is_expected());
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn internal_errors_answer_500() {
        let err = AppError::InternalError("db exploded".into());
        assert!(!err.is_expected());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_errors_use_their_own_mapping() {
        let err = AppError::from(AuthError::UserNotInSession);
        assert!(!err.is_expected());
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
