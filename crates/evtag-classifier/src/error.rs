//! Error types for the tag classifier.

use evtag_core::error::EvtagError;

/// Errors from a language-model call.
///
/// None of these reach HTTP clients: the classifier absorbs them and falls
/// back to the keyword heuristic.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("model API key is not configured")]
    MissingApiKey,
    #[error("model is offline")]
    Offline,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("model returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("model returned no text")]
    EmptyResponse,
    #[error("failed to decode model response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClassifierError::Decode(err.to_string())
        } else {
            ClassifierError::Http(err.to_string())
        }
    }
}

impl From<ClassifierError> for EvtagError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::MissingApiKey => EvtagError::Config(
                "GEMINI_API_KEY is not set and no model.api_key is configured".to_string(),
            ),
            other => EvtagError::Classification(other.to_string()),
        }
    }
}
