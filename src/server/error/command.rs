use thiserror::Error;

use crate::server::error::{store::StoreError, AppError};

/// Reply shown for any failure whose details must stay in the logs.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while running this interaction.";

/// Errors returned by bot interaction handlers.
///
/// The dispatcher splits them into expected errors, whose message is shown to the
/// user as is, and unexpected errors, which are logged and replaced with
/// [`GENERIC_FAILURE_MESSAGE`].
#[derive(Error, Debug)]
pub enum CommandError {
    /// Caused by the user's input; the message is the reply.
    #[error("{0}")]
    User(String),

    /// Service layer error. Expected only for `BadRequest`, `NotFound` and `Conflict`.
    #[error(transparent)]
    App(#[from] AppError),

    /// Discord API call made by the handler failed.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Third-party HTTP lookup failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Key-value store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User(message.into())
    }

    pub fn is_expected(&self) -> bool {
        match self {
            Self::User(_) => true,
            Self::App(err) => err.is_expected(),
            Self::Discord(_) | Self::Http(_) | Self::Store(_) => false,
        }
    }

    /// Whether the service layer refused the input before acting on it.
    ///
    /// The dispatcher hands back the cooldown of such a call, so a typo in a form does
    /// not lock the user out.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, Self::App(AppError::BadRequest(_)))
    }

    /// Text to reply with when this error ends an interaction.
    pub fn user_message(&self) -> String {
        if self.is_expected() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        Self::Discord(Box::new(err))
    }
}

impl From<sea_orm::DbErr> for CommandError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::App(AppError::DbErr(err))
    }
}
