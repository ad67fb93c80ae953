//! Error types returned by request handlers.
//!
//! Every error ends at the request boundary: validation problems become 400,
//! unknown ids become 404 and anything else becomes a generic 500 whose
//! details only go to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use super::pages::{render_not_found_page, render_server_error_page};
use crate::store::StoreError;

/// Errors from the HTML routes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Post not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(message) => Self::BadRequest(message.to_string()),
            StoreError::NotFound => Self::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                tracing::warn!(%message, "Rejected request");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                render_not_found_page("Post not found"),
            )
                .into_response(),
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, render_server_error_page()).into_response()
            }
        }
    }
}

/// Errors from the JSON API routes, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Post not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Post not found"),
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Unhandled API error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
