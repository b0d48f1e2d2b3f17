//! Event tag classification.
//!
//! Builds a fixed instruction prompt from an event description, asks a
//! generative-language model for matching tags, filters the answer down to
//! the known taxonomy and falls back to a keyword heuristic when nothing
//! usable comes back.

pub mod classifier;
pub mod error;
pub mod gemini;
pub mod model;
pub mod parser;
pub mod prompt;

pub use classifier::TagClassifier;
pub use error::ClassifierError;
pub use gemini::GeminiClient;
pub use model::{LanguageModel, OfflineModel, StaticModel};
pub use parser::{keyword_fallback, parse_tags};
pub use prompt::build_prompt;
