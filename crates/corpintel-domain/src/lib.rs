//! Corpintel Domain Layer
//!
//! Value types and trait interfaces shared by every other corpintel crate.
//! It has no external dependencies.
//!
//! ## Key Concepts
//!
//! - **Identifier**: how a caller names a company (name, ticker, both, or nothing)
//! - **Intent**: which lookup a prompt asks for (competitors or subsidiaries)
//! - **Model Tier**: cost/quality class an operation requests
//! - **Generation Request**: one call to a text-generation backend
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identifier;
pub mod intent;
pub mod model_tier;
pub mod request;
pub mod traits;

// Re-exports for convenience
pub use identifier::{Identifier, NOT_AVAILABLE};
pub use intent::Intent;
pub use model_tier::ModelTier;
pub use request::GenerationRequest;
pub use traits::GenerationBackend;
