//! Environment info endpoint
//!
//! GET only. Any other method (HEAD included) is answered with 405.

use axum::{extract::State, http::Method, routing::get, Json, Router};
use envinfo_common::EnvironmentInfo;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// GET /environment
///
/// Takes a fresh snapshot from the configured source on every request.
pub async fn get_environment(State(state): State<AppState>) -> Json<EnvironmentInfo> {
    let info = state.source.snapshot();
    debug!(
        environment = %info.environment,
        version = %info.version,
        "Serving environment info"
    );
    Json(info)
}

/// Any non-GET method on /environment
pub async fn reject_method(method: Method) -> ApiError {
    debug!(%method, "Rejecting unsupported method on /environment");
    ApiError::MethodNotSupported(method)
}

/// Build environment info routes
///
/// axum would otherwise answer HEAD through the GET handler.
pub fn environment_routes() -> Router<AppState> {
    Router::new().route(
        "/environment",
        get(get_environment)
            .head(reject_method)
            .fallback(reject_method),
    )
}
