use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Body of a chat completion request against an OpenAI compatible
/// API (OpenRouter, a local llama.cpp server, etc.)
#[derive(Serialize, Debug)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
}

/// Send a single, non-streaming completion request and return the
/// raw JSON body. The body is returned as-is regardless of the HTTP
/// status since providers report failures with an `error` object.
pub async fn completion(
    client: &reqwest::Client,
    request: &CompletionRequest<'_>,
    api_hostname: &str,
    api_key: &str,
    referer: &str,
    title: &str,
    timeout: Duration,
) -> Result<Value, reqwest::Error> {
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .header("HTTP-Referer", referer)
        .header("X-Title", title)
        .timeout(timeout)
        .json(request)
        .send()
        .await?;

    tracing::debug!("Provider responded with status {}", response.status());

    response.json().await
}
