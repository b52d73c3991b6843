//! Corpintel LLM Provider Layer
//!
//! Implementations of the `GenerationBackend` trait from `corpintel-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI chat-completions API
//!
//! # Examples
//!
//! ```
//! use corpintel_llm::MockProvider;
//! use corpintel_domain::{GenerationBackend, GenerationRequest};
//!
//! let provider = MockProvider::new(r#"["Apple"]"#);
//! let request = GenerationRequest::new("test prompt", "gpt-3.5-turbo", 200);
//! assert_eq!(provider.generate(&request).unwrap(), r#"["Apple"]"#);
//! ```

#![warn(missing_docs)]

pub mod openai;

use corpintel_domain::{GenerationBackend, GenerationRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::{OpenAiConfig, OpenAiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API credential configured
    #[error("Missing credential: OPENAI_API_KEY is not configured")]
    MissingCredential,

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend answered without any completion
    #[error("Empty response: backend returned no completions")]
    EmptyResponse,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail,
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// It records every request so tests can check the model and token budget that
/// an operation asked for.
///
/// # Examples
///
/// ```
/// use corpintel_llm::MockProvider;
/// use corpintel_domain::{GenerationBackend, GenerationRequest};
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
///
/// let request = GenerationRequest::new("prompt1", "model", 10);
/// assert_eq!(provider.generate(&request).unwrap(), "response1");
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    credential_present: bool,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            credential_present: true,
        }
    }

    /// Create a provider that behaves as if no credential were configured
    pub fn without_credential() -> Self {
        Self {
            credential_present: false,
            ..Self::default()
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Fail);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Forget recorded requests
    pub fn reset(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("[]")
    }
}

impl GenerationBackend for MockProvider {
    type Error = LlmError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        // Credential is checked before anything counts as a call
        if !self.credential_present {
            return Err(LlmError::MissingCredential);
        }

        self.requests.lock().unwrap().push(request.clone());

        let responses = self.responses.lock().unwrap();
        match responses.get(&request.prompt) {
            Some(MockReply::Text(text)) => Ok(text.clone()),
            Some(MockReply::Fail) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt, "test-model", 100)
    }

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate(&request("any prompt"));
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::new("fallback");
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate(&request("hello")).unwrap(), "world");
        assert_eq!(provider.generate(&request("foo")).unwrap(), "bar");
        assert_eq!(provider.generate(&request("unknown")).unwrap(), "fallback");
    }

    #[test]
    fn test_mock_provider_records_requests() {
        let provider = MockProvider::default();
        assert_eq!(provider.call_count(), 0);
        assert!(provider.last_request().is_none());

        provider.generate(&request("prompt1")).unwrap();
        provider
            .generate(&GenerationRequest::new("prompt2", "gpt-4.1-mini", 800))
            .unwrap();

        assert_eq!(provider.call_count(), 2);
        let last = provider.last_request().unwrap();
        assert_eq!(last.model, "gpt-4.1-mini");
        assert_eq!(last.max_tokens, 800);

        provider.reset();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.generate(&request("bad prompt"));
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_without_credential() {
        let provider = MockProvider::without_credential();
        let result = provider.generate(&request("prompt"));
        assert!(matches!(result.unwrap_err(), LlmError::MissingCredential));
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate(&request("test")).unwrap();

        // Both share the same request log due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
