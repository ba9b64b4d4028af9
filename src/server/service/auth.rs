use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

const DISCORD_CURRENT_USER_URL: &str = "https://discord.com/api/users/@me";

/// Discord OAuth2 login, from authorize URL to a stored dashboard user.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Authorize URL plus the CSRF state the callback must echo back.
    ///
    /// Only `identify` is requested: the dashboard needs the user's ID and name and
    /// nothing else.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Exchanges the callback code, fetches `users/@me` and upserts the user.
    ///
    /// `set_admin` is true only when the login started with a valid bootstrap code; a
    /// plain login never touches the admin flag.
    pub async fn callback(
        &self,
        authorization_code: String,
        set_admin: bool,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let DiscordUser { id, name, .. } = self.fetch_discord_user(&token).await?;
        let param = UpsertUserParam {
            discord_id: id.get(),
            name,
            is_admin: set_admin.then_some(true),
        };
        let user = UserRepository::new(self.db).upsert(param).await?;

        tracing::info!(user = %user.name, admin = set_admin, "User logged in");

        Ok(user)
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let response = self
            .http_client
            .get(DISCORD_CURRENT_USER_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }
}
