//! Full application router: common and todo routes behind CORS and request tracing.

use crate::error::ConfigError;
use crate::routes::{common_routes, todo_routes};
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// CORS for a single origin with credentials. Methods and headers are mirrored from the
/// preflight request, which is how "allow any" is expressed when credentials are on.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
        var: "CORS_ORIGIN",
        value: origin.to_string(),
    })?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router, ConfigError> {
    let cors = cors_layer(cors_origin)?;
    Ok(Router::new()
        .merge(common_routes(state.clone()))
        .merge(todo_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
