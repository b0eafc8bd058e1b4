//! Deterministic completion client for tests. No network calls.

use std::sync::{Arc, Mutex};

use crate::{CompletionClient, LlmError};

/// Returns canned responses, matched by prompt substring, with a fixed
/// default when no rule matches. Clones share rule and call state.
#[derive(Clone)]
pub struct MockClient {
    default: Result<String, LlmError>,
    rules: Arc<Mutex<Vec<(String, Result<String, LlmError>)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockClient {
    /// A client answering every prompt with the same response.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default: Ok(response.into()),
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A client failing every prompt with the given error.
    pub fn failing(error: LlmError) -> Self {
        Self {
            default: Err(error),
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer prompts containing `needle` with `response`. Rules are
    /// checked in insertion order, first match wins.
    pub fn respond_when(&self, needle: impl Into<String>, response: impl Into<String>) {
        self.rules
            .lock()
            .unwrap()
            .push((needle.into(), Ok(response.into())));
    }

    /// Fail prompts containing `needle` with `error`.
    pub fn fail_when(&self, needle: impl Into<String>, error: LlmError) {
        self.rules.lock().unwrap().push((needle.into(), Err(error)));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompts seen so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CompletionClient for MockClient {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let rules = self.rules.lock().unwrap();
        for (needle, result) in rules.iter() {
            if prompt.contains(needle.as_str()) {
                return result.clone();
            }
        }

        self.default.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_response() {
        let client = MockClient::new("fixed");
        assert_eq!(client.complete("sys", "anything").await.unwrap(), "fixed");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn substring_rules_take_precedence() {
        let client = MockClient::new("default");
        client.respond_when("alpha", "A");
        client.fail_when("beta", LlmError::ContextExceeded("too long".into()));

        assert_eq!(client.complete("", "has alpha inside").await.unwrap(), "A");
        assert!(matches!(
            client.complete("", "has beta inside").await,
            Err(LlmError::ContextExceeded(_))
        ));
        assert_eq!(client.complete("", "neither").await.unwrap(), "default");
    }

    #[tokio::test]
    async fn failing_client() {
        let client = MockClient::failing(LlmError::Unauthorized("401".into()));
        assert!(client.complete("", "prompt").await.is_err());
    }

    #[tokio::test]
    async fn clones_share_call_log() {
        let client = MockClient::new("x");
        let clone = client.clone();
        clone.complete("", "one").await.unwrap();
        assert_eq!(client.call_count(), 1);
        assert_eq!(client.calls(), vec!["one".to_string()]);
    }
}
