//! Typed wrappers over the raw tower-sessions `Session`.
//!
//! Each wrapper owns one concern of the session so handlers never touch string keys:
//! - `AuthSession` - the logged in user's Discord ID
//! - `CsrfSession` - the OAuth state token between login and callback
//! - `OAuthFlowSession` - whether the current login grants admin

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_ADMIN: &str = "auth:set_admin";

pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Logs the user in.
    ///
    /// The session ID is rotated first so an ID planted before login is worthless after it.
    ///
    /// # Returns
    /// - `Ok(())` - User stored in the session
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn login(&self, user_id: u64) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Discord ID of the logged in user.
    ///
    /// The ID is stored as a string; snowflakes do not fit the JSON number range.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError)` - Session store failure or a corrupt stored ID
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(Some(parse_u64_from_string(user_id)?))
    }

    /// Removes all session data and deletes the session record.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes and returns the stored token, so each token validates at most once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?)
    }
}

pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Remembers across the Discord redirect that a valid admin code was presented.
    pub async fn set_admin_flag(&self, set_admin: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_ADMIN, set_admin)
            .await?;
        Ok(())
    }

    /// Removes and returns the admin flag, `false` when it was never set.
    pub async fn take_admin_flag(&self) -> Result<bool, AppError> {
        Ok(self
            .session
            .remove::<bool>(SESSION_AUTH_SET_ADMIN)
            .await?
            .unwrap_or(false))
    }
}
