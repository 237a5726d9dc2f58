use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    // Optional so the server can still start and answer with a
    // configuration error instead of refusing to boot
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub max_tokens: u32,
    pub default_referer: String,
    pub app_title: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("OAK_PROVIDER_HOST")
            .unwrap_or_else(|_| "https://openrouter.ai/api".to_string());
        let openai_api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let openai_model = env::var("OAK_MODEL")
            .unwrap_or_else(|_| "meta-llama/llama-3.3-8b-instruct:free".to_string());
        let max_tokens = env::var("OAK_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);
        let default_referer = env::var("OAK_DEFAULT_REFERER")
            .unwrap_or_else(|_| "https://pokemon-professor-oak.vercel.app".to_string());
        let app_title =
            env::var("OAK_APP_TITLE").unwrap_or_else(|_| "Professor Oak AI".to_string());
        let request_timeout_secs = env::var("OAK_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            max_tokens,
            default_referer,
            app_title,
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}
