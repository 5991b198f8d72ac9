//! Minimal client for OpenAI-compatible chat completion APIs.
//!
//! Works against any provider exposing the `/chat/completions` shape
//! (OpenRouter, Groq, Together, OpenAI itself). The API key is passed
//! per call rather than stored on the client, so callers holding a pool
//! of keys can rotate between requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_client::{LlmClient, ChatRequest, Message};
//!
//! let client = LlmClient::new("https://openrouter.ai/api/v1", "meta-llama/llama-3.3-70b-instruct");
//!
//! let response = client.chat(api_key, ChatRequest::new(client.model())
//!     .message(Message::system("You are a relevance checker"))
//!     .message(Message::user("..."))
//!     .json_mode()
//! ).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{LlmError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Chat completions client with per-call API keys.
#[derive(Clone)]
pub struct LlmClient {
    http_client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    /// Create a new client for the given base URL and default model.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the default model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Chat completion.
    ///
    /// Sends messages to the chat completions endpoint using the given
    /// API key. HTTP 429 maps to [`LlmError::RateLimited`] so callers
    /// can rotate keys before retrying.
    pub async fn chat(&self, api_key: &str, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                LlmError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            warn!("chat completion rate limited");
            return Err(LlmError::RateLimited);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "chat completion API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Parse("no choices in response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }

    /// JSON-mode completion with a system and user prompt.
    ///
    /// Returns the raw content string; callers parse it after stripping
    /// any code fences with [`strip_code_blocks`].
    pub async fn complete_json(
        &self,
        api_key: &str,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(user))
            .temperature(0.1)
            .json_mode();

        let response = self.chat(api_key, request).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = LlmClient::new("https://custom.api.com/v1", "test-model");

        assert_eq!(client.base_url(), "https://custom.api.com/v1");
        assert_eq!(client.model(), "test-model");
    }
}
