use std::time::Duration;

use serde_json::Value;

use super::error::RelayError;
use super::persona::{EMPTY_COMPLETION_FALLBACK, PERSONA_INSTRUCTION};
use crate::core::AppConfig;
use crate::openai::{CompletionRequest, Message, Role, completion};

/// Everything needed to talk to the completion provider. Only
/// constructible with an API key present.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub default_referer: String,
    pub app_title: String,
    pub timeout: Duration,
}

impl TryFrom<&AppConfig> for ProviderConfig {
    type Error = RelayError;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or(RelayError::Configuration)?;

        Ok(Self {
            api_hostname: config.openai_api_hostname.clone(),
            api_key,
            model: config.openai_model.clone(),
            max_tokens: config.max_tokens,
            default_referer: config.default_referer.clone(),
            app_title: config.app_title.clone(),
            timeout: config.request_timeout,
        })
    }
}

/// Stateless relay that frames a transcript with the persona and
/// forwards it to the provider. Cheap to clone; every call owns its
/// own request and response.
#[derive(Clone)]
pub struct Relay {
    provider: ProviderConfig,
    http: reqwest::Client,
}

impl Relay {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RelayError> {
        Ok(Self::new(ProviderConfig::try_from(config)?))
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    /// Get the persona's reply to `transcript`. Makes exactly one
    /// provider call and never retries. `origin` is forwarded as the
    /// referer so the provider can attribute the traffic.
    pub async fn reply(
        &self,
        transcript: &[Message],
        origin: Option<&str>,
    ) -> Result<String, RelayError> {
        let messages = persona_transcript(transcript);
        let request = CompletionRequest {
            model: &self.provider.model,
            messages: &messages,
            max_tokens: self.provider.max_tokens,
        };
        let referer = origin.unwrap_or(&self.provider.default_referer);

        tracing::debug!(
            "Relaying {} messages to {} (referer: {})",
            transcript.len(),
            self.provider.model,
            referer
        );

        let resp = completion(
            &self.http,
            &request,
            &self.provider.api_hostname,
            &self.provider.api_key,
            referer,
            &self.provider.app_title,
            self.provider.timeout,
        )
        .await?;

        if let Some(msg) = provider_error(&resp) {
            return Err(RelayError::Provider(msg));
        }

        Ok(extract_content(&resp))
    }
}

/// Message of the provider's `error` field. Only a set error counts;
/// `null`, `false`, `""` and `0` are treated as no error.
pub fn provider_error(resp: &Value) -> Option<String> {
    let err = resp.get("error")?;
    let is_set = match err {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    };
    if !is_set {
        return None;
    }

    let msg = err["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .unwrap_or("API Error");
    Some(msg.to_string())
}

/// The persona instruction followed by `transcript`, unchanged.
pub fn persona_transcript(transcript: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(transcript.len() + 1);
    messages.push(Message::new(Role::System, PERSONA_INSTRUCTION));
    messages.extend_from_slice(transcript);
    messages
}

/// Text of the first completion choice. A missing or empty completion
/// degrades to a fixed in-character sentence instead of an error.
pub fn extract_content(resp: &Value) -> String {
    match resp["choices"][0]["message"]["content"].as_str() {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => {
            tracing::warn!("Provider returned no completion text. Resp: {}", resp);
            EMPTY_COMPLETION_FALLBACK.to_string()
        }
    }
}
