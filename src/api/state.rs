use crate::core::AppConfig;
use crate::relay::Relay;

pub struct AppState {
    // `None` when the provider API key is missing
    pub relay: Option<Relay>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let relay = match Relay::from_config(&config) {
            Ok(relay) => Some(relay),
            Err(e) => {
                tracing::error!("Chat relay disabled: {}. Set OPENROUTER_API_KEY.", e);
                None
            }
        };
        Self { relay, config }
    }
}
