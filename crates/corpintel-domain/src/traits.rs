//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::GenerationRequest;

/// Trait for text-generation backends
///
/// Implemented by the infrastructure layer (corpintel-llm)
pub trait GenerationBackend {
    /// Error type for generation calls
    type Error;

    /// Send one request and return the first completion
    ///
    /// Implementations make a single attempt and block until the backend
    /// replies or fails.
    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error>;
}
