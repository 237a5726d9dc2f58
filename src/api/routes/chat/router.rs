//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::post,
};
use http::{HeaderMap, header};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::relay::{InvalidRequest, RelayError};

type SharedState = Arc<RwLock<AppState>>;

/// Relay the client's transcript to the provider and return the
/// persona's reply
async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<public::ChatResponse>, ApiError> {
    // Checked before the body so a misconfigured server fails the
    // same way for every request
    let relay = state
        .read()
        .expect("Unable to read share state")
        .relay
        .clone()
        .ok_or(RelayError::Configuration)?;

    let request = public::ChatRequest::from_body(&body)?;
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());

    let content = relay.reply(&request.messages, origin).await?;

    Ok(Json(public::ChatResponse { content }))
}

async fn method_not_allowed() -> ApiError {
    InvalidRequest::MethodNotAllowed.into()
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler).fallback(method_not_allowed))
}
