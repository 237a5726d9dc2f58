//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, body::Body};
use serde_json::Value;

use oak::api::AppState;
use oak::api::app;
use oak::core::AppConfig;

/// Config pointing the provider at `provider_url` (usually a
/// `mockito` server).
pub fn test_config(provider_url: &str) -> AppConfig {
    AppConfig {
        openai_api_hostname: provider_url.to_string(),
        openai_api_key: Some(String::from("test-api-key")),
        openai_model: String::from("test-model"),
        max_tokens: 500,
        default_referer: String::from("https://oak.example.com"),
        app_title: String::from("Professor Oak AI"),
        request_timeout: Duration::from_secs(5),
    }
}

/// Creates a test application router backed by `config`.
pub fn test_app_with_config(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

pub fn test_app(provider_url: &str) -> Router {
    test_app_with_config(test_config(provider_url))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

/// A provider response with a single completion choice
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "gen-test",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
