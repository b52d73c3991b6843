//! Generation request module

/// A single call to a text-generation backend
///
/// Built fresh for every operation and consumed by
/// [`GenerationBackend::generate`](crate::traits::GenerationBackend::generate).
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Fully rendered prompt text
    pub prompt: String,

    /// Backend model identifier (e.g. "gpt-4.1-mini")
    pub model: String,

    /// Upper bound on completion tokens
    pub max_tokens: u32,

    /// Sampling temperature, always 0.0 for extraction operations
    pub temperature: f32,
}

impl GenerationRequest {
    /// Create a request with temperature 0
    pub fn new(prompt: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens,
            temperature: 0.0,
        }
    }
}
