//! Tag classifier: prompt -> model -> parse -> fallback.

use std::sync::Arc;

use tracing::{debug, warn};

use evtag_core::Tag;

use crate::model::LanguageModel;
use crate::parser::{keyword_fallback, parse_tags};
use crate::prompt::build_prompt;

/// Classifies event descriptions into taxonomy tags.
///
/// `classify` never fails and never returns an empty list: model errors and
/// unusable completions both end in the keyword fallback.
#[derive(Clone)]
pub struct TagClassifier {
    model: Arc<dyn LanguageModel>,
}

impl TagClassifier {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Name of the underlying model.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Tags for one event description, in the order the model gave them.
    pub async fn classify(&self, description: &str) -> Vec<Tag> {
        let prompt = build_prompt(description);

        let tags = match self.model.generate(&prompt).await {
            Ok(raw) => {
                debug!(model = %self.model.name(), raw = ?raw, "Model raw response");
                parse_tags(&raw)
            }
            Err(e) => {
                warn!(model = %self.model.name(), error = %e, "Tag model call failed");
                Vec::new()
            }
        };

        if tags.is_empty() {
            let fallback = keyword_fallback(description);
            warn!(fallback = ?fallback, "Tag prediction yielded no tags; falling back");
            return fallback;
        }

        tags
    }
}

impl std::fmt::Debug for TagClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagClassifier")
            .field("model", &self.model.name())
            .finish()
    }
}
