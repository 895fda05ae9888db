use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the Gemini session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model to use (e.g., "gemini-1.5-pro", "gemini-1.5-flash")
    pub model: String,

    /// Optional API base URL for custom endpoints or proxies
    pub api_base: Option<String>,

    /// Request timeout in seconds. `None` waits for the remote call indefinitely.
    pub timeout_secs: Option<u64>,

    /// Sampling temperature (0.0-2.0)
    pub temperature: f32,

    /// Nucleus sampling threshold (0.0-1.0)
    pub top_p: f32,

    /// Number of highest-probability tokens considered at each step
    pub top_k: u32,

    /// Maximum tokens for the response
    pub max_output_tokens: u32,

    /// MIME type requested for the response body
    pub response_mime_type: String,

    /// Enable debug logging of requests and responses
    pub debug: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-1.5-pro".to_string(),
            api_base: None,
            timeout_secs: None,
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
            debug: false,
        }
    }
}

impl LlmConfig {
    /// Build a default configuration around an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::from_env_internal(true)
    }

    /// Load configuration from environment variables without reading `.env`
    #[cfg(test)]
    fn from_env_no_dotenv() -> Result<Self, String> {
        Self::from_env_internal(false)
    }

    /// Environment overrides applied to the defaults, without requiring an API key.
    ///
    /// `api_key` stays empty when neither key variable is set.
    pub fn effective_from_env() -> Self {
        Self::overrides_from_env(true)
    }

    fn from_env_internal(load_dotenv: bool) -> Result<Self, String> {
        let config = Self::overrides_from_env(load_dotenv);

        if env::var("GEMINI_API_KEY").is_err() && env::var("GOOGLE_API_KEY").is_err() {
            return Err("GEMINI_API_KEY not found in environment. Please set it in .env file or environment variables.".to_string());
        }

        if config.api_key.is_empty() {
            return Err("GEMINI_API_KEY is empty".to_string());
        }

        Ok(config)
    }

    fn overrides_from_env(load_dotenv: bool) -> Self {
        if load_dotenv {
            let _ = dotenv::dotenv();
        }

        let mut config = Self::default();

        if let Ok(api_key) = env::var("GEMINI_API_KEY").or_else(|_| env::var("GOOGLE_API_KEY")) {
            config.api_key = api_key;
        }

        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }

        if let Ok(api_base) = env::var("GEMINI_API_BASE") {
            config.api_base = Some(api_base);
        }

        if let Ok(timeout) = env::var("LLM_REQUEST_TIMEOUT") {
            if let Ok(timeout_secs) = timeout.parse::<u64>() {
                config.timeout_secs = Some(timeout_secs);
            }
        }

        if let Ok(max_tokens) = env::var("LLM_MAX_TOKENS") {
            if let Ok(tokens) = max_tokens.parse::<u32>() {
                config.max_output_tokens = tokens;
            }
        }

        if let Ok(temperature) = env::var("LLM_TEMPERATURE") {
            if let Ok(temp) = temperature.parse::<f32>() {
                if (0.0..=2.0).contains(&temp) {
                    config.temperature = temp;
                }
            }
        }

        if let Ok(top_p) = env::var("LLM_TOP_P") {
            if let Ok(p) = top_p.parse::<f32>() {
                if (0.0..=1.0).contains(&p) {
                    config.top_p = p;
                }
            }
        }

        if let Ok(top_k) = env::var("LLM_TOP_K") {
            if let Ok(k) = top_k.parse::<u32>() {
                config.top_k = k;
            }
        }

        if let Ok(debug) = env::var("LLM_DEBUG") {
            config.debug = debug.to_lowercase() == "true" || debug == "1";
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("API key is empty".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("Model name is empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("Temperature must be between 0.0 and 2.0, got {}", self.temperature));
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(format!("top_p must be between 0.0 and 1.0, got {}", self.top_p));
        }

        if self.max_output_tokens == 0 {
            return Err("Max output tokens must be greater than 0".to_string());
        }

        if !self.model.to_lowercase().starts_with("gemini") {
            tracing::warn!("Model '{}' does not look like a Gemini model", self.model);
        }

        Ok(())
    }
}
