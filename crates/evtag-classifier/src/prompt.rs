//! Classification prompt.

use evtag_core::Tag;

/// Build the instruction prompt for one event description.
///
/// The prompt embeds the description verbatim and the full taxonomy, and
/// asks for a bare comma-separated list with `cultural` as the default.
pub fn build_prompt(description: &str) -> String {
    format!(
        r#"
You are a tag classifier for college events.
Event description: "{description}"

Choose ONLY relevant tags from this fixed list:
{tags}

Rules:
- Output must be a comma-separated list of tags from the list above.
- Do NOT include any explanations, prefixes, or suffixes, only the comma-separated list.
- Use exact spellings and casing.
- If no clear tags match, default to '{default}'.

Example Input: A hackathon on AI and robotics
Example Output: {example}
"#,
        description = description,
        tags = Tag::taxonomy_list(),
        default = Tag::Cultural,
        example = [Tag::AiMl, Tag::Robotics, Tag::Tech]
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
