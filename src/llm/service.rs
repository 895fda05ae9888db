use crate::llm::config::LlmConfig;
use crate::llm::session::Session;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors that can occur while talking to the model
#[derive(Debug, Error)]
pub enum LlmServiceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Other error: {0}")]
    Other(String),
}

/// Chat session against the Gemini `generateContent` endpoint.
///
/// Every successful exchange appends the user turn and the model turn to the
/// history, and the whole history is sent with the next prompt.
pub struct GeminiSession {
    client: Client,
    config: LlmConfig,
    history: Vec<GeminiContent>,
}

impl GeminiSession {
    /// Start a session with an empty history
    pub fn new(config: LlmConfig) -> Result<Self, LlmServiceError> {
        config.validate().map_err(LlmServiceError::ConfigError)?;

        let client = Client::builder()
            .build()
            .map_err(|e| LlmServiceError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Number of turns (user and model) exchanged so far
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn endpoint(&self) -> String {
        let base = self.config.api_base.as_deref().unwrap_or(GEMINI_BASE_URL);
        format!("{}/models/{}:generateContent", base.trim_end_matches('/'), self.config.model)
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        let mut contents = self.history.clone();
        contents.push(GeminiContent::user(prompt));

        GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
                max_output_tokens: self.config.max_output_tokens,
                response_mime_type: self.config.response_mime_type.clone(),
            },
        }
    }

    async fn post(&self, request: &GeminiRequest) -> Result<GeminiResponse, LlmServiceError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmServiceError::ApiError(format!("Failed to send request to Gemini API: {}", e)))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmServiceError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmServiceError::ApiError(format!(
                "Gemini API request failed with status {}: {}",
                status, body
            )));
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| LlmServiceError::ParseError(format!("Failed to parse Gemini API response: {}", e)))
    }
}

#[async_trait]
impl Session for GeminiSession {
    async fn send(&mut self, prompt: &str) -> Result<String, LlmServiceError> {
        let request = self.build_request(prompt);

        if self.config.debug {
            tracing::debug!(
                "Sending request to Gemini: model={}, contents_count={}, prompt_chars={}",
                self.config.model,
                request.contents.len(),
                prompt.chars().count()
            );
        }

        let response = match self.config.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), self.post(&request))
                .await
                .map_err(|_| LlmServiceError::Timeout)??,
            None => self.post(&request).await?,
        };

        let text = response.text()?;

        if self.config.debug {
            tracing::debug!("Received response: {} chars", text.chars().count());
        }

        self.history.push(GeminiContent::user(prompt));
        self.history.push(GeminiContent::model(&text));

        Ok(text)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: Some(text.to_string()) }],
        }
    }

    // Gemini uses "model" where other APIs say "assistant"
    fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![GeminiPart { text: Some(text.to_string()) }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate
    fn text(self) -> Result<String, LlmServiceError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmServiceError::ParseError("Gemini returned no candidates in response".to_string()))?;

        let content = candidate.content.ok_or_else(|| {
            LlmServiceError::ParseError(format!(
                "Gemini candidate has no content (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

        Ok(content.parts.into_iter().filter_map(|part| part.text).collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}
