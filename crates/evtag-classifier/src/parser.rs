//! Model response parsing and the keyword fallback.

use std::str::FromStr;

use evtag_core::Tag;

/// Substrings that send an unclassified description to `tech`.
const TECH_KEYWORDS: [&str; 6] = ["ai", "code", "robot", "cyber", "tech", "electronics"];

/// Extract taxonomy tags from a raw model completion.
///
/// Backticks and the literal `json` are stripped, then only the first line
/// is considered. Fragments must match a tag exactly (case-sensitive);
/// anything else is dropped. Order and repeats are kept as the model gave
/// them. May return an empty list.
pub fn parse_tags(raw: &str) -> Vec<Tag> {
    let cleaned = raw.trim().replace('`', "").replace("json", "");
    let first_line = cleaned.trim().split('\n').next().unwrap_or("");

    first_line
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(|fragment| Tag::from_str(fragment).ok())
        .collect()
}

/// Deterministic tag for a description the model could not classify.
///
/// Case-insensitive substring match, so e.g. "said" counts as containing
/// "ai".
pub fn keyword_fallback(description: &str) -> Vec<Tag> {
    let lowered = description.to_lowercase();
    if TECH_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        vec![Tag::Tech]
    } else {
        vec![Tag::Cultural]
    }
}
