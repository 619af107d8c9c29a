//! HTTP client for the text-generation endpoint.

use crate::wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Fixed system instruction biasing output toward a short children's
/// story. Policy, not user input.
pub const SYSTEM_INSTRUCTION: &str = "You are a creative children's story writer. \
    Create a short, engaging bedtime story suitable for kids.";

/// Connection settings for the text-generation vendor, supplied
/// explicitly at construction (no ambient environment reads here).
#[derive(Debug, Clone)]
pub struct StorygenConfig {
    /// Full chat-completion endpoint URL.
    pub api_url: String,
    /// Bearer credential.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
}

/// Errors from the text-generation client.
#[derive(Debug, thiserror::Error)]
pub enum StorygenError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor returned a non-2xx status code.
    #[error("text generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// A 2xx response that does not carry the expected content field.
    #[error("text generation response missing {0}")]
    MalformedResponse(&'static str),
}

/// HTTP client for the text-generation vendor.
pub struct StorygenClient {
    client: reqwest::Client,
    config: StorygenConfig,
}

impl StorygenClient {
    /// Create a new client for the configured endpoint.
    pub fn new(config: StorygenConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (connection pooling across vendor clients).
    pub fn with_client(client: reqwest::Client, config: StorygenConfig) -> Self {
        Self { client, config }
    }

    /// Generate a story from a free-text prompt.
    ///
    /// Issues a single `POST` carrying the fixed system instruction and
    /// the user prompt. Empty prompts are allowed; the output is then
    /// vendor-defined. The call is atomic from the caller's perspective:
    /// a complete story or an error, never a partial result.
    pub async fn generate(&self, prompt: &str) -> Result<String, StorygenError> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "Requesting story");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorygenError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let story = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(StorygenError::MalformedResponse("choices[0].message.content"))?;

        tracing::debug!(story_len = story.len(), "Story generated");
        Ok(story)
    }
}
