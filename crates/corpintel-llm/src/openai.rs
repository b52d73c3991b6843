//! OpenAI Provider Implementation
//!
//! Integration with the OpenAI chat-completions API (or any server exposing
//! the same wire format at a different base URL).
//!
//! # Features
//!
//! - Async HTTP communication, with a blocking `GenerationBackend` wrapper
//! - Credential injected through [`OpenAiConfig`], checked on every call
//! - Exactly one attempt per request; failures are surfaced, never retried
//!
//! # Examples
//!
//! ```no_run
//! use corpintel_llm::{OpenAiConfig, OpenAiProvider};
//!
//! let provider = OpenAiProvider::new(OpenAiConfig::from_env());
//!
//! // `generate` from the GenerationBackend trait blocks on its own runtime,
//! // so call it from a plain thread or `tokio::task::spawn_blocking`.
//! ```

use crate::LlmError;
use corpintel_domain::{GenerationBackend, GenerationRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Connection settings for [`OpenAiProvider`]
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API credential; never written to config files
    #[serde(skip)]
    pub api_key: Option<String>,

    /// API base URL, without trailing `/chat/completions`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl OpenAiConfig {
    /// Create a config for the public OpenAI endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: default_base_url(),
        }
    }

    /// Resolve settings from `OPENAI_API_KEY` and `OPENAI_BASE_URL`
    ///
    /// A missing key is not an error here; it is reported as
    /// [`LlmError::MissingCredential`] when a request is attempted.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            base_url: std::env::var(BASE_URL_ENV).unwrap_or_else(|_| default_base_url()),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// True when a non-blank credential is present
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// OpenAI API provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// The underlying HTTP client keeps reqwest's defaults; no request
    /// timeout is imposed.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Send one chat-completion request and return the first choice's text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No credential is configured (before any network I/O)
    /// - The model does not exist (HTTP 404)
    /// - The rate limit is hit (HTTP 429)
    /// - Network communication fails or any other status is returned
    /// - The body cannot be decoded or holds no choices
    pub async fn complete(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));

        let body = ChatCompletionRequest {
            model: &request.model,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(model = %request.model, max_tokens = request.max_tokens, "Sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(request.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        // Only the first candidate is consumed
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        choice.message.content.ok_or_else(|| {
            LlmError::InvalidResponse("First choice has no text content".to_string())
        })
    }
}

impl GenerationBackend for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;

        runtime.block_on(self.complete(request))
    }
}
