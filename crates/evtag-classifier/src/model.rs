//! Language model trait and the non-network implementations.
//!
//! - `GeminiClient` (in `gemini`) is the production backend.
//! - `StaticModel` answers every prompt with a fixed completion, for tests.
//! - `OfflineModel` fails every call, so classification always takes the
//!   keyword fallback. Used when the server runs without a credential.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ClassifierError;

/// A text-completion capability: given a prompt, return generated text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ClassifierError>;

    /// Model identifier, for logs and the health endpoint.
    fn name(&self) -> &str;
}

/// Model that returns the same completion for every prompt and records the
/// prompts it was given.
#[derive(Debug)]
pub struct StaticModel {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl StaticModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LanguageModel for StaticModel {
    async fn generate(&self, prompt: &str) -> Result<String, ClassifierError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Model that is never reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineModel;

#[async_trait]
impl LanguageModel for OfflineModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::Offline)
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_model_returns_response_and_records_prompt() {
        let model = StaticModel::new("music, dance");
        let out = model.generate("first").await.unwrap();
        assert_eq!(out, "music, dance");
        model.generate("second").await.unwrap();
        assert_eq!(model.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_offline_model_always_errors() {
        let model = OfflineModel;
        let err = model.generate("anything").await.unwrap_err();
        assert!(matches!(err, ClassifierError::Offline));
        assert_eq!(model.name(), "offline");
    }
}
