//! envinfo-server library - environment info microservice
//!
//! Serves the deployment tier and build identifier of the running instance
//! at `GET /environment`.

use std::sync::Arc;

use axum::Router;
use envinfo_common::EnvironmentSource;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod error;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVES: &str = "envinfo_server=info,tower_http=info";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Where each request takes its environment snapshot from
    pub source: Arc<dyn EnvironmentSource>,
}

impl AppState {
    /// Create new application state
    pub fn new(source: impl EnvironmentSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::environment_routes())
        .layer(
            // Request spans and responses at INFO so the default filter shows them
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
