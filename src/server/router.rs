//! API routes, OpenAPI document and the layers wrapped around them.

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        feedback::{self, FEEDBACK_TAG},
        me::{self, ME_TAG},
        phrase::{self, PHRASE_TAG},
        profile::{self, PROFILE_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Replenish one request every 100 ms per client IP.
const RATE_LIMIT_PERIOD_MS: u64 = 100;
const RATE_LIMIT_BURST: u32 = 50;

#[derive(OpenApi)]
#[openapi(
    info(title = "Wren API", description = "Profiles, feedback and phrases of the Wren bot"),
    tags(
        (name = AUTH_TAG, description = "Discord OAuth login"),
        (name = ME_TAG, description = "Data of the logged in user"),
        (name = PROFILE_TAG, description = "Profile and social link management"),
        (name = FEEDBACK_TAG, description = "Feedback ticket management"),
        (name = PHRASE_TAG, description = "Phrases shown by the bot"),
        (name = ADMIN_TAG, description = "Dashboard users, admins and statistics"),
    )
)]
struct ApiDoc;

/// Builds the API router.
///
/// Swagger UI is served at `/api/docs` and the OpenAPI document at
/// `/api/docs/openapi.json`. Only the API routes are rate limited.
///
/// # Arguments
/// - `app_url` - Origin of the dashboard, the only origin CORS allows
///
/// # Returns
/// - `Ok(Router)` - Router waiting for its `AppState`
/// - `Err(AppError::ConfigErr)` - `app_url` is not a valid origin
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(me::get_own_profile))
        .routes(routes!(me::get_own_feedback))
        .routes(routes!(profile::get_profiles))
        .routes(routes!(
            profile::get_profile,
            profile::update_profile,
            profile::delete_profile
        ))
        .routes(routes!(profile::add_social))
        .routes(routes!(profile::remove_social))
        .routes(routes!(feedback::get_feedback))
        .routes(routes!(
            feedback::get_feedback_by_id,
            feedback::delete_feedback
        ))
        .routes(routes!(feedback::update_feedback_status))
        .routes(routes!(phrase::get_phrases, phrase::create_phrase))
        .routes(routes!(phrase::update_phrase, phrase::delete_phrase))
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::get_admins))
        .routes(routes!(admin::add_admin, admin::remove_admin))
        .routes(routes!(admin::get_stats))
        .split_for_parts();

    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(RATE_LIMIT_PERIOD_MS)
        .burst_size(RATE_LIMIT_BURST)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let api_router = api_router
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .layer(cors_layer(app_url)?);

    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api)))
}

fn cors_layer(app_url: &str) -> Result<CorsLayer, AppError> {
    let origin = app_url.trim_end_matches('/');
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: app_url.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
