//! Application state shared across request handlers.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{service::admin_code::AdminCodeService, store::KeyValueStore};

/// OAuth2 client with authorization and token endpoints set, as Discord login needs.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Shared resources cloned into every request handler.
///
/// Every field is cheap to clone; the connection pool and reqwest client are reference
/// counted internally and the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool, shared with the bot and the scheduler.
    pub db: DatabaseConnection,

    /// Client for the Discord OAuth token exchange and `users/@me`.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Holds the one-time admin bootstrap code, if one was generated at startup.
    pub admin_code_service: AdminCodeService,

    /// Cooldown and telemetry store, read by the stats endpoint.
    pub store: Arc<dyn KeyValueStore>,

    /// Public base URL of the dashboard; login redirects land here.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        admin_code_service: AdminCodeService,
        store: Arc<dyn KeyValueStore>,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_code_service,
            store,
            app_url,
        }
    }
}
