use serde::{Deserialize, Serialize};

use crate::{CompletionClient, LlmError};

#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    system: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url,
            model,
            client: reqwest::Client::new(),
        }
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.base_url);

        let request = OllamaRequest {
            model: self.model.clone(),
            system: system.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(ollama_response.response)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new("http://localhost:11434".to_string(), "llama3".to_string())
    }
}

impl CompletionClient for OllamaClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.generate(system, prompt).await
    }
}

/// Map a non-success status to the error taxonomy. Backends word
/// context-overflow errors inconsistently, so the body text is also
/// inspected for the usual phrasings.
fn classify_failure(status: reqwest::StatusCode, body: &str) -> LlmError {
    let lower = body.to_lowercase();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return LlmError::Unauthorized(format!("{status}: {body}"));
    }
    if status == reqwest::StatusCode::PAYLOAD_TOO_LARGE
        || lower.contains("context length")
        || lower.contains("token limit")
    {
        return LlmError::ContextExceeded(format!("{status}: {body}"));
    }
    if status.is_server_error() {
        return LlmError::Unavailable(format!("{status}: {body}"));
    }

    LlmError::Backend(format!("{status}: {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_failures() {
        let err = classify_failure(reqwest::StatusCode::UNAUTHORIZED, "invalid_api_key");
        assert!(matches!(err, LlmError::Unauthorized(_)));
    }

    #[test]
    fn classifies_context_overflow_from_body() {
        let err = classify_failure(
            reqwest::StatusCode::BAD_REQUEST,
            "this model's maximum context length is 8192 tokens",
        );
        assert!(matches!(err, LlmError::ContextExceeded(_)));
    }

    #[test]
    fn classifies_server_errors_as_unavailable() {
        let err = classify_failure(reqwest::StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(matches!(err, LlmError::Unavailable(_)));
    }

    #[test]
    fn other_statuses_are_backend_errors() {
        let err = classify_failure(reqwest::StatusCode::NOT_FOUND, "model not found");
        assert!(matches!(err, LlmError::Backend(_)));
    }
}
