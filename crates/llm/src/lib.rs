//! Generative completion capability shared by the summarizer and the
//! mind-map builder.
//!
//! Everything that talks to a model goes through [`CompletionClient`], so
//! the deterministic fallback paths can be exercised with the backend
//! entirely absent or mocked.

pub mod mock;
pub mod ollama;

pub use mock::MockClient;
pub use ollama::OllamaClient;

use thiserror::Error;

/// Errors reported by a completion backend.
///
/// The summarizer degrades to its extractive fallback on the first three
/// variants; the last two propagate (there is no safe generic recovery
/// for them at that layer).
#[derive(Error, Debug, Clone)]
pub enum LlmError {
    /// Input exceeded the backend's context window.
    #[error("context window exceeded: {0}")]
    ContextExceeded(String),

    /// Missing or invalid credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Backend unreachable: connection failure, timeout, or 5xx.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Any other backend-reported failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// A text-completion backend: one system instruction, one user prompt,
/// one text response.
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
