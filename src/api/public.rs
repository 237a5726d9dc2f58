//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::relay::{InvalidRequest, RelayError};

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Errors

#[derive(Debug)]
pub struct ApiError(RelayError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RelayError::InvalidRequest(InvalidRequest::MethodNotAllowed) => {
                StatusCode::METHOD_NOT_ALLOWED
            }
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Configuration | RelayError::Provider(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the caller. Internal causes are never
    /// included.
    pub fn public_message(&self) -> String {
        match &self.0 {
            RelayError::Timeout(_) => String::from("Upstream request timed out"),
            RelayError::Internal(_) => String::from("Internal server error"),
            err => err.to_string(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            RelayError::InvalidRequest(e) => tracing::debug!("Rejected request: {}", e),
            RelayError::Provider(msg) => tracing::warn!("Provider error: {}", msg),
            err => tracing::error!("{}", err),
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<RelayError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}
