//! Generation backend abstraction
//!
//! Provides a trait-based seam over the local generation service so the
//! orchestrator and HTTP layer can be exercised without a running model.
//!
//! - [`OllamaClient`] talks to an Ollama-compatible HTTP API
//! - [`MockBackend`] replays queued results and records every call

pub mod mock;
pub mod ollama;

pub use mock::MockBackend;
pub use ollama::OllamaClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "phi4-mini";

/// One request/response exchange with the generation service
///
/// Implementations make exactly one attempt per call. There is no retry and no
/// timeout beyond what the transport applies on its own; wrap the client if
/// that is needed.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit `prompt` to `model` and return the complete generated text
    ///
    /// # Errors
    ///
    /// - `Error::BackendTransport` when the service cannot be reached
    /// - `Error::BackendProtocol` when the reply is not JSON or has no
    ///   non-empty `response` field
    async fn generate(&self, prompt: &str, model: &str) -> Result<String>;

    /// Return the service's model descriptors verbatim
    ///
    /// A reply without a `models` field yields an empty list.
    async fn list_models(&self) -> Result<Vec<Value>>;
}
