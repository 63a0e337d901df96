//! HTTP error type for envinfo-server

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced directly to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request used a method other than GET
    #[error("Method not supported: {0}")]
    MethodNotSupported(Method),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::MethodNotSupported(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "GET")],
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
