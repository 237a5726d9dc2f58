use async_trait::async_trait;
use http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

use crate::openai::Message;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay returned an error: {0}")]
    Relay(String),
    #[error("relay responded with status {0}")]
    Status(StatusCode),
    #[error("relay response had no content")]
    MalformedBody,
}

/// Anything that can turn a transcript into the persona's next reply.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn complete(&self, history: &[Message]) -> Result<String, ClientError>;
}

/// Talks to a relay server over HTTP (`POST {base_url}/api/chat`).
pub struct HttpRelayClient {
    url: String,
    http: reqwest::Client,
}

impl HttpRelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: format!("{}/api/chat", base_url.trim_end_matches("/")),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn complete(&self, history: &[Message]) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "messages": history }))
            .send()
            .await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if let Some(err) = body["error"].as_str() {
            return Err(ClientError::Relay(err.to_string()));
        }
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        body["content"]
            .as_str()
            .map(String::from)
            .ok_or(ClientError::MalformedBody)
    }
}
