//! Error types for the extraction pipeline

use corpintel_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while running an extraction operation
#[derive(Error, Debug)]
pub enum IntelError {
    /// No backend credential is configured
    #[error("Missing credential: set OPENAI_API_KEY to call the generation backend")]
    MissingCredential,

    /// A template was rendered without one of its required variables
    #[error("Missing template variable: {0}")]
    MissingVariable(String),

    /// Transport or protocol failure from the generation backend
    #[error("Backend error: {0}")]
    Backend(String),

    /// Backend reply is not a JSON array
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for IntelError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential => IntelError::MissingCredential,
            other => IntelError::Backend(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for IntelError {
    fn from(e: serde_json::Error) -> Self {
        IntelError::MalformedResponse(e.to_string())
    }
}
